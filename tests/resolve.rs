use sky_color::{resolve, ColorValue, Error, RGBColor};

const NIGHT: &str = "#191970";
const MORNING: &str = "#87CEEB";
const EVENING: &str = "#4682B4";

fn hex(zip: &str, hour: u8) -> String {
    resolve(zip, hour).unwrap().to_string()
}

#[test]
fn midday_returns_palette_entry() {
    let palette = ColorValue::sky();
    for n in 0 .. 10 {
        for hour in 10 ..= 16 {
            assert_eq!(resolve(&n.to_string(), hour), Ok(palette.get(n)),
                       "zip {n} at {hour}");
        }
    }
}

#[test]
fn periodic_modulo_ten() {
    for n in (0 .. 1000).chain([99_999, 123_456_789, u64::MAX / 10 - 10]) {
        assert_eq!(resolve(&(n + 10).to_string(), 12),
                   resolve(&n.to_string(), 12), "zip {n}");
    }
}

#[test]
fn night_override() {
    for zip in ["0", "7", "90210", "55555"] {
        assert_eq!(hex(zip, 5), NIGHT);
        assert_eq!(hex(zip, 21), NIGHT);
        assert_eq!(hex(zip, 0), NIGHT);
        assert_eq!(hex(zip, 23), NIGHT);
        assert_ne!(hex(zip, 20), NIGHT);
    }
}

#[test]
fn morning_override() {
    for zip in ["1", "3", "02134"] {
        assert_eq!(hex(zip, 6), MORNING);
        assert_eq!(hex(zip, 7), MORNING);
        assert_eq!(hex(zip, 9), MORNING);
    }
    // Palette slot 1 is the same steel blue as the evening override.
    assert_eq!(hex("1", 10), EVENING);
}

#[test]
fn evening_override() {
    for zip in ["2", "8", "10002"] {
        assert_eq!(hex(zip, 17), EVENING);
        assert_eq!(hex(zip, 18), EVENING);
        assert_eq!(hex(zip, 20), EVENING);
        assert_ne!(hex(zip, 16), EVENING);
    }
}

#[test]
fn invalid_zip_is_rejected_the_same_way() {
    assert_eq!(resolve("", 12), Err(Error::InvalidInput));
    assert_eq!(resolve("abc", 12), Err(Error::InvalidInput));
    assert_eq!(resolve("", 12), resolve("abc", 12));
    assert_eq!(resolve("12ab", 3), Err(Error::InvalidInput));
}

#[test]
fn invalid_hour() {
    assert_eq!(resolve("12345", 24), Err(Error::HourOutOfRange(24)));
    // The zip code is checked first.
    assert_eq!(resolve("x", 99), Err(Error::InvalidInput));
}

#[test]
fn idempotent() {
    for hour in 0 .. 24 {
        assert_eq!(resolve("60614", hour), resolve("60614", hour));
    }
}
