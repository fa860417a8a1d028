//! SenML units registry (RFC 8428 section 12.1)

pub const METER: &str = "m";
pub const KILOGRAM: &str = "kg";
/// Not recommended
pub const GRAM: &str = "g";
pub const SECOND: &str = "s";
pub const AMPERE: &str = "A";
pub const KELVIN: &str = "K";
pub const CANDELA: &str = "cd";
pub const MOLE: &str = "mol";
pub const HERTZ: &str = "Hz";
pub const RADIAN: &str = "rad";
pub const STERADIAN: &str = "sr";
pub const NEWTON: &str = "N";
pub const PASCAL: &str = "Pa";
pub const JOULE: &str = "J";
pub const WATT: &str = "W";
pub const COULOMB: &str = "C";
pub const VOLT: &str = "V";
pub const FARAD: &str = "F";
pub const OHM: &str = "Ohm";
pub const SIEMENS: &str = "S";
pub const WEBER: &str = "Wb";
pub const TESLA: &str = "T";
pub const HENRY: &str = "H";
pub const CELSIUS: &str = "Cel";
pub const LUMEN: &str = "lm";
pub const LUX: &str = "lx";
pub const BECQUEREL: &str = "Bq";
pub const GRAY: &str = "Gy";
pub const SIEVERT: &str = "Sv";
pub const KATAL: &str = "kat";
pub const SQUARE_METER: &str = "m2";
pub const CUBIC_METER: &str = "m3";
/// Not recommended
pub const LITER: &str = "l";
pub const METER_PER_SECOND: &str = "m/s";
pub const METER_PER_SQUARE_SECOND: &str = "m/s2";
pub const CUBIC_METER_PER_SECOND: &str = "m3/s";
/// Not recommended
pub const LITER_PER_SECOND: &str = "l/s";
pub const WATT_PER_SQUARE_METER: &str = "W/m2";
pub const CANDELA_PER_SQUARE_METER: &str = "cd/m2";
pub const BIT: &str = "bit";
pub const BIT_PER_SECOND: &str = "bit/s";
pub const LATITUDE: &str = "lat";
pub const LONGITUDE: &str = "lon";
pub const PH: &str = "pH";
pub const DECIBEL: &str = "dB";
pub const DECIBEL_WATT: &str = "dBW";
/// Not recommended
pub const BEL_SOUND_PRESSURE: &str = "Bspl";
pub const COUNT: &str = "count";
pub const RATIO: &str = "/";
/// Not recommended
pub const PERCENT: &str = "%";
pub const RELATIVE_HUMIDITY: &str = "%RH";
pub const ENERGY_LEVEL_PERCENT: &str = "%EL";
pub const ENERGY_LEVEL_SECONDS: &str = "EL";
pub const EVENTS_PER_SECOND: &str = "1/s";
/// Not recommended
pub const EVENTS_PER_MINUTE: &str = "1/min";
/// Not recommended
pub const BEATS_PER_MINUTE: &str = "beat/min";
/// Not recommended
pub const BEATS: &str = "beats";
pub const SIEMENS_PER_METER: &str = "S/m";

/// Every unit symbol in the registry
pub const REGISTERED: &[&str] = &[
    METER,
    KILOGRAM,
    GRAM,
    SECOND,
    AMPERE,
    KELVIN,
    CANDELA,
    MOLE,
    HERTZ,
    RADIAN,
    STERADIAN,
    NEWTON,
    PASCAL,
    JOULE,
    WATT,
    COULOMB,
    VOLT,
    FARAD,
    OHM,
    SIEMENS,
    WEBER,
    TESLA,
    HENRY,
    CELSIUS,
    LUMEN,
    LUX,
    BECQUEREL,
    GRAY,
    SIEVERT,
    KATAL,
    SQUARE_METER,
    CUBIC_METER,
    LITER,
    METER_PER_SECOND,
    METER_PER_SQUARE_SECOND,
    CUBIC_METER_PER_SECOND,
    LITER_PER_SECOND,
    WATT_PER_SQUARE_METER,
    CANDELA_PER_SQUARE_METER,
    BIT,
    BIT_PER_SECOND,
    LATITUDE,
    LONGITUDE,
    PH,
    DECIBEL,
    DECIBEL_WATT,
    BEL_SOUND_PRESSURE,
    COUNT,
    RATIO,
    PERCENT,
    RELATIVE_HUMIDITY,
    ENERGY_LEVEL_PERCENT,
    ENERGY_LEVEL_SECONDS,
    EVENTS_PER_SECOND,
    EVENTS_PER_MINUTE,
    BEATS_PER_MINUTE,
    BEATS,
    SIEMENS_PER_METER,
];

/// Check whether `unit` is a registered SenML unit symbol (case-sensitive)
pub fn is_registered(unit: &str) -> bool {
    REGISTERED.contains(&unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_units() {
        assert!(is_registered("Cel"));
        assert!(is_registered("%RH"));
        assert!(is_registered("m/s2"));
        assert!(!is_registered("cel"));
        assert!(!is_registered("degC"));
        assert!(!is_registered(""));
    }
}
