use std::{
    io::{self, Write},
    sync::Arc,
};

use parking_lot::Mutex;

use vkformat::registry;
use vkformat_logging::{set_logger, Logger};

#[derive(Clone, Default)]
struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

static LOGGER: Logger = Logger::new();

// Single test, as the logger is global to the test binary
#[test]
fn registry_logs_to_installed_logger() {
    let capture = CaptureWriter::default();
    LOGGER.set_log_to_console(false);
    LOGGER.set_always_flush(true);
    assert!(LOGGER.add_writer(Box::new(capture.clone())).is_ok());
    set_logger(&LOGGER);

    assert!(registry::validate().is_ok());
    assert!(registry::get_size(185).is_err());

    let out = String::from_utf8_lossy(&capture.0.lock()).into_owned();
    assert!(out.contains("[VERBOSE] [Format Registry]: Validated 185 formats over 10 partitions"), "{out}");
    assert!(!out.contains("[ERROR  ]"), "{out}");

    #[cfg(feature = "validation")]
    assert!(out.contains("[WARNING] [Format Registry]: Format ordinal 185 is out of range, valid ordinals are 0..185"), "{out}");
    #[cfg(not(feature = "validation"))]
    assert!(!out.contains("[WARNING]"), "{out}");
}
