// Tests for the advisory fallback templates and the never-fail contract
// of the remote client.

use uyku_takip::advisor::{fallback, prompt, AdvisoryClient};
use uyku_takip::analysis::AnalysisResult;
use uyku_takip::config::GeminiConfig;

fn analysis(snoring: bool, level: u8, breathing: bool, quality: u8) -> AnalysisResult {
    AnalysisResult {
        snoring,
        snoring_level: level,
        breathing_problem: breathing,
        quality_score: quality,
    }
}

#[test]
fn test_duration_question_matches_any_casing() {
    let result = analysis(false, 1, false, 4);
    let expected = "Toplam 7 saat uyumuşsunuz. Bu süre ideal bir uyku süresidir.";

    for question in [
        "ne kadar uyudum",
        "NE KADAR UYUDUM",
        "Ne Kadar Uyudum?",
        "Dün gece ne kadar uyudum acaba?",
    ] {
        assert_eq!(fallback::default_answer(question, &result, 7), expected);
    }
}

#[test]
fn test_duration_thresholds() {
    let result = analysis(false, 1, false, 4);

    assert!(fallback::default_answer("ne kadar uyudum", &result, 8)
        .contains("ideal bir uyku süresidir"));
    assert!(fallback::default_answer("ne kadar uyudum", &result, 5)
        .contains("kabul edilebilir bir uyku süresidir"));
    assert!(fallback::default_answer("ne kadar uyudum", &result, 3)
        .contains("Uyku sürenizi artırmanızı öneririz"));
}

#[test]
fn test_snoring_and_breathing_answers() {
    let snorer = analysis(true, 3, true, 2);
    let quiet = analysis(false, 1, false, 4);

    assert!(fallback::default_answer("horluyor muyum", &snorer, 7).starts_with("Evet"));
    assert!(fallback::default_answer("horluyor muyum", &quiet, 7).starts_with("Hayır"));
    assert!(
        fallback::default_answer("nefes alma problemim var mı", &snorer, 7).starts_with("Evet")
    );
    assert!(
        fallback::default_answer("nefes alma problemim var mı", &quiet, 7).starts_with("Hayır")
    );
}

#[test]
fn test_unmatched_question_gets_generic_reply() {
    let result = analysis(false, 1, false, 3);
    assert_eq!(
        fallback::default_answer("kahvaltıda ne yemeliyim", &result, 7),
        "Bu konuda size yardımcı olabilirim. Lütfen sorunuzu daha detaylı bir şekilde sorun."
    );
}

#[test]
fn test_first_matching_topic_wins() {
    let result = analysis(false, 1, false, 5);

    // Contains both the quality phrase and the duration phrase; the
    // quality topic comes first in the dispatch order.
    let answer =
        fallback::default_answer("uyku kalitem nasıl ve ne kadar uyudum", &result, 7);
    assert!(answer.contains("Uyku kaliteniz 5/5"));
}

#[test]
fn test_default_analysis_quality_phrasing() {
    assert!(fallback::default_analysis(&analysis(false, 1, false, 5), 8).contains("İyi"));
    assert!(fallback::default_analysis(&analysis(false, 1, false, 3), 8).contains("Orta"));
    assert!(fallback::default_analysis(&analysis(false, 1, false, 1), 8).contains("Kötü"));
}

#[test]
fn test_default_analysis_reports_findings() {
    let text = fallback::default_analysis(&analysis(true, 2, true, 2), 5);

    assert!(text.contains("Horlama tespit edildi"));
    assert!(text.contains("Nefes alma problemleri tespit edildi"));
    assert!(text.contains("Uyku Süresi: 5 saat"));

    let clean = fallback::default_analysis(&analysis(false, 1, false, 5), 8);
    assert!(clean.contains("Horlama tespit edilmedi"));
    assert!(clean.contains("Nefes alma normal"));
}

#[test]
fn test_recommendations_accumulate_per_threshold() {
    // Every threshold tripped: snoring, breathing, low quality, short sleep
    let all = fallback::recommendations(&analysis(true, 3, true, 1), 4);
    assert_eq!(all.len(), 12);

    // Nothing tripped
    let none = fallback::recommendations(&analysis(false, 1, false, 5), 8);
    assert!(none.is_empty());

    // Only short sleep
    let short = fallback::recommendations(&analysis(false, 1, false, 5), 5);
    assert_eq!(short.len(), 3);
    assert!(short[0].contains("Uyku sürenizi artırın"));
}

#[test]
fn test_prompts_embed_session_fields() {
    let result = analysis(true, 2, false, 4);

    let analysis_prompt = prompt::analysis_prompt(&result, 7);
    assert!(analysis_prompt.contains("Horlama Durumu: Var"));
    assert!(analysis_prompt.contains("Horlama Seviyesi: 2/3"));
    assert!(analysis_prompt.contains("Nefes Alma Problemleri: Yok"));
    assert!(analysis_prompt.contains("Uyku Kalitesi: 4/5"));
    assert!(analysis_prompt.contains("Uyku Süresi: 7 saat"));

    let question_prompt = prompt::question_prompt("horluyor muyum", &result, 7);
    assert!(question_prompt.contains("Kullanıcının sorusu: horluyor muyum"));
    assert!(question_prompt.contains("Uyku Süresi: 7 saat"));
}

#[tokio::test]
async fn test_unreachable_endpoint_falls_back_to_templates() {
    let client = AdvisoryClient::new(GeminiConfig {
        api_key: "test".to_string(),
        model: "gemini-1.5-pro".to_string(),
        // Discard port: connection is refused immediately
        endpoint: "http://127.0.0.1:9".to_string(),
    });

    let result = analysis(true, 2, false, 2);

    let text = client.analyze_session(&result, 5).await;
    assert_eq!(text, fallback::default_analysis(&result, 5));

    let answer = client.answer("ne kadar uyudum", &result, 5).await;
    assert_eq!(answer, fallback::default_answer("ne kadar uyudum", &result, 5));
}
