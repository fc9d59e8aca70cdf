//! # Administrative Division Codes (GB/T 2260)
//!
//! Province-level prefixes shared by the citizen-ID and USCI validators.
//! Only the first two digits of a division code are checked; county-level
//! codes change too often to be worth tracking here.
//!
//! `83` is not a GB/T 2260 code. Taiwan-issued citizen numbers start with
//! it while the division code is `71`, so both map to 台湾.

use serde::Serialize;

/// A province-level division: two-digit code and region name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Province {
    /// Two ASCII digits.
    pub code: &'static str,
    /// Region name.
    pub name: &'static str,
}

const fn p(code: &'static str, name: &'static str) -> Province {
    Province { code, name }
}

/// All known province prefixes, sorted by code.
pub static PROVINCES: [Province; 36] = [
    p("11", "北京"),
    p("12", "天津"),
    p("13", "河北"),
    p("14", "山西"),
    p("15", "内蒙古"),
    p("21", "辽宁"),
    p("22", "吉林"),
    p("23", "黑龙江"),
    p("31", "上海"),
    p("32", "江苏"),
    p("33", "浙江"),
    p("34", "安徽"),
    p("35", "福建"),
    p("36", "江西"),
    p("37", "山东"),
    p("41", "河南"),
    p("42", "湖北"),
    p("43", "湖南"),
    p("44", "广东"),
    p("45", "广西"),
    p("46", "海南"),
    p("50", "重庆"),
    p("51", "四川"),
    p("52", "贵州"),
    p("53", "云南"),
    p("54", "西藏"),
    p("61", "陕西"),
    p("62", "甘肃"),
    p("63", "青海"),
    p("64", "宁夏"),
    p("65", "新疆"),
    p("71", "台湾"),
    p("81", "香港"),
    p("82", "澳门"),
    p("83", "台湾"),
    p("91", "国外"),
];

/// Look up a province by its exact two-character code.
pub fn province(code: &str) -> Option<&'static Province> {
    PROVINCES
        .binary_search_by(|probe| probe.code.cmp(code))
        .ok()
        .map(|idx| &PROVINCES[idx])
}

/// Region name for a two-character province code.
pub fn province_name(code: &str) -> Option<&'static str> {
    province(code).map(|p| p.name)
}

/// Whether `code` is a known two-character province code.
pub fn is_known_province(code: &str) -> bool {
    province(code).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_unique() {
        for pair in PROVINCES.windows(2) {
            assert!(pair[0].code < pair[1].code, "{} !< {}", pair[0].code, pair[1].code);
        }
    }

    #[test]
    fn codes_are_two_digits() {
        for p in &PROVINCES {
            assert_eq!(p.code.len(), 2);
            assert!(p.code.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn lookup_known_codes() {
        assert_eq!(province_name("11"), Some("北京"));
        assert_eq!(province_name("65"), Some("新疆"));
        assert_eq!(province_name("91"), Some("国外"));
    }

    #[test]
    fn taiwan_has_two_codes() {
        assert_eq!(province_name("71"), Some("台湾"));
        assert_eq!(province_name("83"), Some("台湾"));
    }

    #[test]
    fn lookup_is_exact_match() {
        assert!(!is_known_province("1"));
        assert!(!is_known_province("110"));
        assert!(!is_known_province(" 11"));
        assert!(!is_known_province("00"));
        assert!(!is_known_province("16"));
        assert!(!is_known_province(""));
    }
}
