use std::fs;
use std::sync::Arc;

use axum::Router;
use scada_layout_server::app::create_app;
use scada_layout_server::configs::{Layout, Logger, Server, Settings};
use scada_layout_server::services::{DEVICE_CONFIG_DIR, ICON_IMAGE_CUT_FILE, TimeProvider};
use tempfile::TempDir;
use time::OffsetDateTime;

pub const IMAGE_BASE_URL: &str = "http://static.local/img/";

pub struct FixedTimeProvider;

impl TimeProvider for FixedTimeProvider {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap()
    }
}

pub struct MockApp {
    pub conf_dir: TempDir,
    pub router: Router,
}

impl MockApp {
    pub fn new() -> Self {
        let conf_dir = tempfile::tempdir().unwrap();
        fs::write(
            conf_dir.path().join(ICON_IMAGE_CUT_FILE),
            "alarm:\n  x: 0\n  y: 0\n  width: 32\n  height: 32\n",
        )
        .unwrap();
        fs::create_dir(conf_dir.path().join(DEVICE_CONFIG_DIR)).unwrap();

        let settings = Arc::new(Settings {
            server: Server {
                host: String::from("127.0.0.1"),
                port: 0,
            },
            logger: Logger {
                level: String::from("debug"),
            },
            layout: Layout {
                conf_dir: conf_dir.path().to_string_lossy().to_string(),
                static_image_path: String::from(IMAGE_BASE_URL),
            },
        });

        let router = create_app(&settings, Arc::new(FixedTimeProvider));

        Self { conf_dir, router }
    }

    pub fn with_device(self, file: &str, content: &str) -> Self {
        fs::write(
            self.conf_dir.path().join(DEVICE_CONFIG_DIR).join(file),
            content,
        )
        .unwrap();
        self
    }

    /// A device with one page holding one single-column table and one cell.
    pub fn with_single_cell_device(self, file: &str, id: &str) -> Self {
        let content = format!(
            r##"
id: "{id}"
pages:
  - title: Boiler Room
    displayTime: 30
    style:
      indexTitleBackgroundColor: "#1f1f1f"
      indexTitleFontColor: "#ffffff"
      indexTitleFontSize: 32
      titleBackgroundColor: "#333333"
      titleFontColor: "#eeeeee"
      subTitleBackgroundColor: "#222222"
      subTitleFontColor: "#cccccc"
      valueBackgroundColor: "#000000"
      valueFontColor: "#00ff00"
      dataAtFontColor: "#888888"
      alarmBackgroundColor: "#ff0000"
      alarmFontColor: "#ffffff"
      footerFontColor: "#aaaaaa"
    detail:
      - type: grid
        title: Pressure
        style: {{ width: 960, height: 540 }}
        titleFontSize: 24
        footerFontSize: 14
        header:
          - title: P1
        detail:
          - - title: P1
              field: p1
              maxValue: 3.0
              maxValueAlarmText: High
              valueFontSize: 28
"##
        );

        self.with_device(file, &content)
    }
}
