use rand::seq::SliceRandom;

pub(crate) const GREETINGS: &[&str] = &[
    "Hai! Saya FinanceBot, siap membantu mencatat keuangan kamu 💰",
    "Hello! Ada transaksi yang mau dicatat hari ini?",
    "Halo! Ketik '/help' untuk melihat cara pakai bot ini",
];

/// Greeting for users whose name is known.
pub(crate) const PERSONAL_GREETING: &str = "Hai {name}! 👋 Bulan ini kamu sudah mengeluarkan \
{total_spent}, paling banyak untuk {top_category}.";

pub(crate) const UNKNOWN: &[&str] = &[
    "Maaf, saya belum mengerti. Ketik 'help' untuk melihat cara penggunaan",
    "Hmm, bisa dijelaskan lagi? Atau ketik 'bantuan' untuk panduan",
    "Saya belum paham maksudmu. Coba ketik '/help' ya",
];

pub(crate) const HELP: &str = "🤖 *FinanceBot - Panduan Penggunaan*

📝 *Mencatat Transaksi:*
/catat 15000 makan siang
/catat 50000 bensin motor

📊 *Cek Pengeluaran:*
\"berapa duit yang sudah kuhabiskan hari ini?\"
\"pengeluaran bulan ini\"
\"laporan 3 bulan terakhir\"

💰 *Fitur Lainnya:*
\"saldo saya\" - cek sisa uang
\"kategori terbesar\" - analisis pengeluaran
\"/stats\" - statistik keuangan
\"/setbudget 2000000\" - atur budget bulan ini
\"budget\" - cek pemakaian budget
\"bantuan\" - tampilkan menu ini
\"export\" - simpan semua transaksi ke file CSV

Contoh: /catat 20000 buku kuliah";

pub(crate) const INVALID_TRANSACTION: &str = "Format tidak valid. Contoh: /catat 15000 makan siang";
pub(crate) const INVALID_PERIOD: &str =
    "Format periode tidak valid. Contoh: 'berapa pengeluaran 3 bulan terakhir?'";
pub(crate) const INVALID_BUDGET: &str = "Format budget tidak valid. Contoh: /setbudget 2000000";
pub(crate) const NO_BUDGET: &str =
    "ℹ️ Budget bulan ini belum diset. Atur dengan: /setbudget 2000000";
pub(crate) const APOLOGY: &str = "Maaf, terjadi kesalahan. Coba lagi ya!";

pub(crate) fn pick<'a>(options: &[&'a str], rng: &mut impl rand::Rng) -> &'a str {
    options.choose(rng).copied().unwrap_or_default()
}
