//! Deterministic advisory text used when the remote call fails

use crate::analysis::AnalysisResult;

/// Canned Q&A topics, evaluated in order; first match wins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CannedTopic {
    QualityOverview,
    Snoring,
    Breathing,
    Duration,
    Recommendations,
}

impl CannedTopic {
    pub const ORDER: [CannedTopic; 5] = [
        CannedTopic::QualityOverview,
        CannedTopic::Snoring,
        CannedTopic::Breathing,
        CannedTopic::Duration,
        CannedTopic::Recommendations,
    ];

    /// Phrase the question must contain (compared case-insensitively)
    fn keyword(&self) -> &'static str {
        match self {
            CannedTopic::QualityOverview => "uyku kalitem nasıl",
            CannedTopic::Snoring => "horluyor muyum",
            CannedTopic::Breathing => "nefes alma problemim var mı",
            CannedTopic::Duration => "ne kadar uyudum",
            CannedTopic::Recommendations => "önerileriniz neler",
        }
    }

    fn matches(&self, question: &str) -> bool {
        question.to_lowercase().contains(self.keyword())
    }

    fn render(&self, analysis: &AnalysisResult, duration_hours: u32) -> String {
        match self {
            CannedTopic::QualityOverview => {
                let verdict = if analysis.quality_score >= 4 {
                    "İyi bir uyku kalitesine sahipsiniz."
                } else if analysis.quality_score >= 2 {
                    "Orta seviyede bir uyku kalitesine sahipsiniz."
                } else {
                    "Uyku kalitenizi artırmak için önerilerimizi dikkate alın."
                };
                format!(
                    "Uyku kaliteniz {}/5 seviyesinde. {}",
                    analysis.quality_score, verdict
                )
            }
            CannedTopic::Snoring => {
                if analysis.snoring {
                    "Evet, horlama tespit edildi. Yatış pozisyonunuzu değiştirmeyi ve bir \
                     uzmana başvurmayı düşünebilirsiniz."
                        .to_string()
                } else {
                    "Hayır, horlama tespit edilmedi.".to_string()
                }
            }
            CannedTopic::Breathing => {
                if analysis.breathing_problem {
                    "Evet, nefes alma problemleri tespit edildi. Burun tıkanıklığınız varsa \
                     tedavi olmanızı öneririz."
                        .to_string()
                } else {
                    "Hayır, nefes alma problemleri tespit edilmedi.".to_string()
                }
            }
            CannedTopic::Duration => {
                let verdict = if duration_hours >= 7 {
                    "Bu süre ideal bir uyku süresidir."
                } else if duration_hours >= 5 {
                    "Bu süre kabul edilebilir bir uyku süresidir."
                } else {
                    "Uyku sürenizi artırmanızı öneririz."
                };
                format!("Toplam {} saat uyumuşsunuz. {}", duration_hours, verdict)
            }
            CannedTopic::Recommendations => recommendations(analysis, duration_hours).join("\n"),
        }
    }
}

/// Templated four-section summary used when the analysis call fails
pub fn default_analysis(analysis: &AnalysisResult, duration_hours: u32) -> String {
    let quality = if analysis.quality_score >= 4 {
        "İyi"
    } else if analysis.quality_score >= 2 {
        "Orta"
    } else {
        "Kötü"
    };

    let snoring = if analysis.snoring {
        "Horlama tespit edildi"
    } else {
        "Horlama tespit edilmedi"
    };

    let breathing = if analysis.breathing_problem {
        "Nefes alma problemleri tespit edildi"
    } else {
        "Nefes alma normal"
    };

    format!(
        "1. Genel Uyku Kalitesi Değerlendirmesi:\n\
         {} bir uyku kalitesine sahipsiniz.\n\
         \n\
         2. Sağlık Durumu Analizi:\n\
         • {}\n\
         • {}\n\
         • Uyku Süresi: {} saat\n\
         \n\
         3. Öneriler ve İyileştirmeler:\n\
         {}\n\
         \n\
         4. Dikkat Edilmesi Gereken Noktalar:\n\
         • Düzenli uyku saatleri oluşturun\n\
         • Yatak odanızı karanlık ve sessiz tutun\n\
         • Yatmadan önce elektronik cihazlardan uzak durun\n\
         • Stres yönetimi için meditasyon yapın",
        quality,
        snoring,
        breathing,
        duration_hours,
        recommendations(analysis, duration_hours).join("\n")
    )
}

/// Canned answer for a free-form question, first matching topic wins
pub fn default_answer(question: &str, analysis: &AnalysisResult, duration_hours: u32) -> String {
    CannedTopic::ORDER
        .iter()
        .find(|topic| topic.matches(question))
        .map(|topic| topic.render(analysis, duration_hours))
        .unwrap_or_else(|| {
            "Bu konuda size yardımcı olabilirim. Lütfen sorunuzu daha detaylı bir şekilde sorun."
                .to_string()
        })
}

/// Conditional recommendation bullets over the analysis thresholds
pub fn recommendations(analysis: &AnalysisResult, duration_hours: u32) -> Vec<String> {
    let mut items = Vec::new();

    if analysis.snoring {
        items.push("• Yatış pozisyonunuzu değiştirmeyi deneyin");
        items.push("• Yastık yüksekliğinizi ayarlayın");
        items.push("• Kilo vermeyi düşünün");
    }

    if analysis.breathing_problem {
        items.push("• Burun tıkanıklığınız varsa tedavi olun");
        items.push("• Yatak odanızı havalandırın");
        items.push("• Alerjenlerden uzak durun");
    }

    if analysis.quality_score < 3 {
        items.push("• Düzenli egzersiz yapın");
        items.push("• Kafein tüketimini azaltın");
        items.push("• Uyku düzeninizi koruyun");
    }

    if duration_hours < 6 {
        items.push("• Uyku sürenizi artırın");
        items.push("• Erken yatmayı deneyin");
        items.push("• Günlük aktivitelerinizi düzenleyin");
    }

    items.into_iter().map(String::from).collect()
}
