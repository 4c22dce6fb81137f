//! Prompt builders for the generative endpoint

use crate::analysis::AnalysisResult;

fn var_yok(flag: bool) -> &'static str {
    if flag {
        "Var"
    } else {
        "Yok"
    }
}

/// Detailed-assessment prompt over one session's analysis fields
pub fn analysis_prompt(analysis: &AnalysisResult, duration_hours: u32) -> String {
    format!(
        "Aşağıdaki uyku verilerini analiz edip, kişinin uyku kalitesi ve sağlık durumu \
         hakkında detaylı bir değerlendirme yap:\n\
         \n\
         Horlama Durumu: {}\n\
         Horlama Seviyesi: {}/3\n\
         Nefes Alma Problemleri: {}\n\
         Uyku Kalitesi: {}/5\n\
         Uyku Süresi: {} saat\n\
         \n\
         Lütfen şu başlıklar altında değerlendirme yap:\n\
         1. Genel Uyku Kalitesi Değerlendirmesi\n\
         2. Sağlık Durumu Analizi\n\
         3. Öneriler ve İyileştirmeler\n\
         4. Dikkat Edilmesi Gereken Noktalar",
        var_yok(analysis.snoring),
        analysis.snoring_level,
        var_yok(analysis.breathing_problem),
        analysis.quality_score,
        duration_hours
    )
}

/// Free-form Q&A prompt carrying the same session context
pub fn question_prompt(question: &str, analysis: &AnalysisResult, duration_hours: u32) -> String {
    format!(
        "Kullanıcının uyku verileri:\n\
         Horlama Durumu: {}\n\
         Horlama Seviyesi: {}/3\n\
         Nefes Alma Problemleri: {}\n\
         Uyku Kalitesi: {}/5\n\
         Uyku Süresi: {} saat\n\
         \n\
         Kullanıcının sorusu: {}\n\
         \n\
         Lütfen bu veriler ışığında kullanıcının sorusunu yanıtla.",
        var_yok(analysis.snoring),
        analysis.snoring_level,
        var_yok(analysis.breathing_problem),
        analysis.quality_score,
        duration_hours,
        question
    )
}
