//! Tests for chart parsing from disk
//!
//! Fixtures are written to a temporary folder; text charts are Shift-JIS encoded.

use std::fs;
use std::path::{Path, PathBuf};

use bmsmeta_core::hash::{md5_hex, sha256_hex};
use bmsmeta_core::{
    Error, Keymode, ResourceKind, parse_chart, parse_json_chart, parse_text_chart,
};
use encoding_rs::SHIFT_JIS;
use tempfile::TempDir;

fn write_sjis(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    let (bytes, _, had_errors) = SHIFT_JIS.encode(content);
    assert!(!had_errors, "fixture must be encodable");
    fs::write(&path, &bytes).unwrap();
    path
}

const SEVEN_KEY_CHART: &str = "\
*---------------------- HEADER FIELD
#PLAYER 1
#GENRE テクノ
#TITLE 冥 [ANOTHER]
#ARTIST 作曲者
#BPM 150
#PLAYLEVEL 12
#RANK 2
#DIFFICULTY 4

#WAV01 kick.wav
#WAV02 スネア.wav
#BMP01 bg.bmp

*---------------------- MAIN DATA FIELD
#00111:01010101
#00112:00020002
#00116:01000000
#00118:00000200
#00101:01
#00211:01
";

mod text_charts {
    use super::*;

    #[test]
    fn test_full_text_chart() {
        let temp = TempDir::new().unwrap();
        let path = write_sjis(temp.path(), "mei_a.bme", SEVEN_KEY_CHART);

        let chart = parse_text_chart(&path).unwrap();
        assert_eq!(chart.path, path);
        assert_eq!(chart.title, "冥 [ANOTHER]");
        assert_eq!(chart.genre, "テクノ");
        assert_eq!(chart.artist, "作曲者");
        assert_eq!(chart.play_level, "12");
        assert_eq!(chart.difficulty, "4");
        assert_eq!(chart.keymode, Keymode::Seven);
        // one per playable line: 11, 12, 16, 18 and 11 in measure 2
        assert_eq!(chart.total_notes, 5);

        let resources = chart.resources.as_ref().unwrap();
        assert_eq!(resources.get(ResourceKind::Audio, "02"), Some("スネア.wav"));
        assert_eq!(resources.get(ResourceKind::Image, "01"), Some("bg.bmp"));
    }

    #[test]
    fn test_hashes_match_file_bytes() {
        let temp = TempDir::new().unwrap();
        let path = write_sjis(temp.path(), "a.bms", SEVEN_KEY_CHART);
        let bytes = fs::read(&path).unwrap();

        let chart = parse_text_chart(&path).unwrap();
        assert_eq!(chart.md5, md5_hex(&bytes));
        assert_eq!(chart.sha256, sha256_hex(&bytes));

        let again = parse_text_chart(&path).unwrap();
        assert_eq!(chart.md5, again.md5);
        assert_eq!(chart.sha256, again.sha256);
    }

    #[test]
    fn test_five_key_without_extra_channels() {
        let temp = TempDir::new().unwrap();
        let path = write_sjis(temp.path(), "a.bms", "#TITLE five\n#00111:01\n#00115:01\n");
        assert_eq!(parse_text_chart(&path).unwrap().keymode, Keymode::Five);
    }

    #[test]
    fn test_nine_key_dialect() {
        let temp = TempDir::new().unwrap();
        let path = write_sjis(temp.path(), "a.pms", "#00111:01\n#00122:01\n#00125:01\n");
        let chart = parse_text_chart(&path).unwrap();
        assert_eq!(chart.keymode, Keymode::Nine);
        assert_eq!(chart.total_notes, 3);
    }

    #[test]
    fn test_double_play_charts() {
        let temp = TempDir::new().unwrap();
        let ten = write_sjis(temp.path(), "ten.bms", "#00111:01\n#00121:01\n");
        let fourteen = write_sjis(temp.path(), "fourteen.bme", "#00118:01\n#00121:01\n");
        assert_eq!(parse_text_chart(&ten).unwrap().keymode, Keymode::Ten);
        assert_eq!(parse_text_chart(&fourteen).unwrap().keymode, Keymode::Fourteen);
    }

    #[test]
    fn test_invalid_encoding_is_decode_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.bms");
        fs::write(&path, b"#TITLE ok\r\n#ARTIST \x81\x20\r\n").unwrap();

        match parse_text_chart(&path) {
            Err(Error::Decode { path: err_path, line }) => {
                assert_eq!(err_path, path);
                assert_eq!(line, 2);
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_open_error() {
        let temp = TempDir::new().unwrap();
        let err = parse_text_chart(temp.path().join("gone.bms")).unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
    }
}

mod json_charts {
    use super::*;

    #[test]
    fn test_json_chart_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("song.bmson");
        let content = r#"{
            "version": "1.0.0",
            "info": {
                "title": "Title",
                "subtitle": "[HYPER]",
                "artist": "Artist",
                "genre": "Genre",
                "chart_name": "HYPER",
                "mode_hint": "beat-7k",
                "level": 9
            }
        }"#;
        fs::write(&path, content).unwrap();

        let chart = parse_json_chart(&path).unwrap();
        assert_eq!(chart.title, "Title[HYPER]");
        assert_eq!(chart.subtitle, "HYPER");
        assert_eq!(chart.play_level, "9");
        assert_eq!(chart.keymode, Keymode::Seven);
        assert_eq!(chart.total_notes, 1);
        assert!(chart.md5.is_empty());
        assert_eq!(chart.sha256, sha256_hex(content.as_bytes()));
    }

    #[test]
    fn test_malformed_json_is_fatal() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.bmson");
        fs::write(&path, "{ \"info\": { \"title\": ").unwrap();

        let err = parse_chart(&path).unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
        assert_eq!(err.path(), path);
    }
}
