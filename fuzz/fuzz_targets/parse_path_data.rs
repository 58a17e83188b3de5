#![no_main]
use libfuzzer_sys::fuzz_target;

use svgpath::{ErrorKind, PathBuilder, PathParser};

fuzz_target!(|data: &[u8]| {
    if let Ok(path_str) = std::str::from_utf8(data) {
        let mut builder = PathBuilder::default();
        let mut parser = PathParser::new(&mut builder);
        let success = parser.parse(path_str);

        assert_eq!(success, parser.error_kind() == ErrorKind::None);
        assert!(parser.error_offset() <= path_str.len());
        if success {
            assert_eq!(parser.error_offset(), path_str.len());
        }
    }
});
