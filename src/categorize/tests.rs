#![allow(clippy::unwrap_used)]

use super::*;

fn default_categorizer() -> Categorizer {
    Categorizer::new(&KeywordTable::default()).unwrap()
}

// ── Default table ─────────────────────────────────────────────

#[test]
fn test_categorize_known_descriptions() {
    let cat = default_categorizer();
    let cases = [
        ("makan ayam", Category::Makanan),
        ("bensin motor", Category::Transportasi),
        ("beli buku", Category::Pendidikan),
        ("nonton film", Category::Hiburan),
        ("sabun mandi", Category::Kebutuhan),
        ("beli obat flu", Category::Kesehatan),
    ];
    for (desc, expected) in cases {
        assert_eq!(cat.categorize(desc), expected, "{desc}");
    }
}

#[test]
fn test_categorize_unseen_is_lainnya() {
    let cat = default_categorizer();
    assert_eq!(cat.categorize("xyz unseen word"), Category::Lainnya);
    assert_eq!(cat.categorize(""), Category::Lainnya);
}

#[test]
fn test_categorize_case_insensitive() {
    let cat = default_categorizer();
    assert_eq!(cat.categorize("BENSIN Motor"), Category::Transportasi);
    assert_eq!(cat.categorize("Nasi Goreng"), Category::Makanan);
}

#[test]
fn test_categorize_first_rule_wins() {
    // "makan" (makanan) is checked before "jalan" (hiburan)
    let cat = default_categorizer();
    assert_eq!(cat.categorize("makan sambil jalan"), Category::Makanan);
    // "ojek" (transportasi) before "buku" (pendidikan)
    assert_eq!(cat.categorize("ojek ke toko buku"), Category::Transportasi);
}

#[test]
fn test_categorize_multiword_keywords() {
    let cat = default_categorizer();
    assert_eq!(cat.categorize("pasta gigi"), Category::Kebutuhan);
    assert_eq!(cat.categorize("pastagigi"), Category::Kebutuhan);
    assert_eq!(cat.categorize("hand sanitizer"), Category::Kesehatan);
    assert_eq!(cat.categorize("hangout"), Category::Hiburan);
}

// ── Custom tables ─────────────────────────────────────────────

#[test]
fn test_custom_table_without_catch_all() {
    let table = KeywordTable {
        rules: vec![KeywordRule::new(Category::Hiburan, "konser")],
    };
    let cat = Categorizer::new(&table).unwrap();
    assert_eq!(cat.categorize("tiket konser"), Category::Hiburan);
    assert_eq!(cat.categorize("bensin"), Category::Lainnya);
}

#[test]
fn test_custom_table_order_is_priority() {
    let table = KeywordTable {
        rules: vec![
            KeywordRule::new(Category::Kesehatan, "vitamin"),
            KeywordRule::new(Category::Makanan, "vitamin|jus"),
        ],
    };
    let cat = Categorizer::new(&table).unwrap();
    assert_eq!(cat.categorize("jus vitamin"), Category::Kesehatan);
    assert_eq!(cat.categorize("jus jeruk"), Category::Makanan);
}

#[test]
fn test_invalid_pattern_is_an_error() {
    let table = KeywordTable {
        rules: vec![KeywordRule::new(Category::Makanan, "(unclosed")],
    };
    let err = Categorizer::new(&table).err().unwrap();
    assert!(err.to_string().contains("makanan"));
}
