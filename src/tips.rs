//! Daily sleep-hygiene tips shown on the home screen

use rand::seq::SliceRandom;

pub const SLEEP_TIPS: [&str; 20] = [
    "Uyku öncesi mavi ışık yayan cihazlardan uzak durmak, melatonin hormonunun daha iyi salgılanmasını sağlar.",
    "Düzenli uyku saatleri, vücudun biyolojik saatini düzenleyerek daha kaliteli uyku sağlar.",
    "Uyku öncesi 15-20 dakika meditasyon yapmak, uyku kalitesini artırır.",
    "Yatak odasının sıcaklığının 18-22°C arasında olması, ideal uyku için önerilir.",
    "Uyku öncesi ağır yemeklerden kaçınmak, daha rahat bir uyku sağlar.",
    "Düzenli egzersiz yapmak, uyku kalitesini artırır ancak yatmadan 3 saat önce yapılmalıdır.",
    "Uyku öncesi kafein tüketiminden kaçınmak, daha hızlı uykuya dalmayı sağlar.",
    "Yatak odasında sadece uyku ve cinsellik aktivitelerinin yapılması, beynin uyku ile ilişkilendirmesini güçlendirir.",
    "Uyku öncesi ılık bir duş almak, vücut sıcaklığını düşürerek uykuya dalmayı kolaylaştırır.",
    "Uyku süresinin 7-9 saat arasında olması, optimal sağlık için önerilir.",
    "Uyku öncesi rahatlatıcı müzik dinlemek, stres seviyesini düşürür.",
    "Yatak odasının karanlık olması, melatonin hormonunun daha iyi salgılanmasını sağlar.",
    "Uyku öncesi günlük tutmak, zihinsel rahatlama sağlar.",
    "Düzenli uyku saatleri, bağışıklık sistemini güçlendirir.",
    "Uyku öncesi yoga yapmak, kas gerginliğini azaltır.",
    "Uyku sırasında vücut, günlük hasarları onarır ve yeniler.",
    "Uyku eksikliği, kilo alımına ve metabolik bozukluklara yol açabilir.",
    "Uyku öncesi su içmek önemlidir, ancak çok fazla içmek uykuyu bölebilir.",
    "Uyku sırasında beyin, günlük bilgileri işler ve hafızayı güçlendirir.",
    "Uyku öncesi rahatlatıcı bitki çayları içmek, uyku kalitesini artırır.",
];

/// Pick a tip uniformly at random
pub fn tip_of_the_day() -> &'static str {
    SLEEP_TIPS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(SLEEP_TIPS[0])
}
