//! Fixed bilingual keyword tables
//!
//! Canonical part names map to ordered surface variants as they appear in
//! the logs, English and Korean. Variants are stored pre-lowercased because
//! the tagger folds each description once and then matches exact substrings.
//! The table order is the tie-break order of the frequency report.

/// Canonical part name → ordered keyword variants
pub const PART_KEYWORDS: &[(&str, &[&str])] = &[
    ("Wire Rope", &["wire rope", "wire", "와이어", "와이어로프"]),
    ("Motor", &["motor", "모터"]),
    ("Brake", &["brake", "브레이크"]),
    ("Bearing", &["bearing", "brg", "베어링"]),
    ("Reducer", &["reducer", "감속기", "리듀서"]),
    ("Pump", &["pump", "펌프"]),
    ("Valve", &["valve", "밸브"]),
    ("Inverter", &["inverter", "인버터"]),
    ("Contactor", &["contactor", "접촉기", "콘탯타"]),
    ("Relay", &["relay", "릴레이", "계전기"]),
    ("Limit Switch", &["limit switch", "limit", "리미트", "리밋"]),
    ("Cable", &["cable", "케이블"]),
    ("Hose", &["hose", "호스"]),
    ("Wheel", &["wheel", "휠", "바퀴"]),
    ("Coupling", &["coupling", "커플링"]),
    ("Chain", &["chain", "체인"]),
    ("Hook", &["hook", "훅", "후크"]),
    ("Drum", &["drum", "드럼"]),
    ("Sheave", &["sheave", "시브"]),
    ("Fuse", &["fuse", "퓨즈"]),
    ("O-Ring", &["o-ring", "oring", "오링"]),
    ("Oil", &["oil", "오일", "유압유"]),
    ("Filter", &["filter", "필터"]),
    ("Bolt", &["bolt", "bolting", "볼트", "볼팅"]),
    ("Cylinder", &["cylinder", "cyl", "실린더"]),
    ("Grab", &["grab", "그랩"]),
    ("Trolley", &["trolley", "트롤리"]),
    ("Rail", &["rail", "레일"]),
    ("Bus Bar", &["bus bar", "busbar", "버스바"]),
    ("Panel", &["panel", "패널"]),
    ("Remote Control", &["remote", "리모콘", "리모컨", "원격"]),
];

/// Action terms that make a part mention a counted event
/// (replace / exchange / new part / repair / inspect / mount / demount)
pub const ACTION_KEYWORDS: &[&str] = &["교체", "교환", "신품", "수리", "점검", "취부", "취외"];
