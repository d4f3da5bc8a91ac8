//! Static knowledge base of simplified SEAD 4 guideline excerpts.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::GuidelineCode;

/// One guideline excerpt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guideline {
    pub code: GuidelineCode,
    pub title: &'static str,
    pub concern: &'static str,
    pub disqualifying_conditions: &'static [&'static str],
    pub mitigating_conditions: &'static [&'static str],
    pub citation: &'static str,
}

impl Guideline {
    /// Returns the first `max_chars` characters of the concern statement.
    ///
    /// Counts characters, not bytes, so the cut never splits a code point.
    pub fn concern_excerpt(&self, max_chars: usize) -> &'static str {
        match self.concern.char_indices().nth(max_chars) {
            Some((byte_idx, _)) => &self.concern[..byte_idx],
            None => self.concern,
        }
    }
}

static GUIDELINES: Lazy<HashMap<GuidelineCode, Guideline>> = Lazy::new(|| {
    [
        Guideline {
            code: GuidelineCode::G,
            title: "Guideline G: Alcohol Consumption",
            concern: "Excessive alcohol consumption often leads to the exercise of questionable judgment \
                      or the failure to control impulses, and can raise questions about an individual's \
                      reliability and trustworthiness.",
            disqualifying_conditions: &[
                "Alcohol-related incidents away from work, such as driving while under the influence",
                "Habitual or binge consumption of alcohol to the point of impaired judgment",
                "Diagnosis by a medical professional of alcohol use disorder",
            ],
            mitigating_conditions: &[
                "So much time has passed since the incident that it is unlikely to recur",
                "The individual acknowledges the issue and has taken steps (e.g., counseling, AA)",
                "A favorable prognosis by a qualified medical professional",
            ],
            citation: "SEAD 4, Adjudicative Guidelines, Paragraph 21",
        },
        Guideline {
            code: GuidelineCode::H,
            title: "Guideline H: Drug Involvement and Substance Misuse",
            concern: "The illegal use of controlled substances can raise questions about an individual's \
                      ability or willingness to comply with laws, rules, and regulations.",
            disqualifying_conditions: &[
                "Any drug abuse (use of illegal drugs or prescription drugs without authorization)",
                "Testing positive for illegal drug use",
                "Illegal drug possession, including cultivation, processing, or distribution",
            ],
            mitigating_conditions: &[
                "The behavior happened so long ago or under such unusual circumstances that recurrence is unlikely",
                "A demonstrated intent not to abuse drugs in the future (e.g., signed statement)",
                "Satisfactory completion of a prescribed drug treatment program",
            ],
            citation: "SEAD 4, Adjudicative Guidelines, Paragraph 24",
        },
        Guideline {
            code: GuidelineCode::D,
            title: "Guideline D: Sexual Behavior",
            concern: "Sexual behavior that involves a criminal offense, reflects a lack of judgment, \
                      or may subject the individual to coercion or duress.",
            disqualifying_conditions: &[
                "Sexual behavior of a criminal nature",
                "Sexual behavior that causes vulnerability to coercion, exploitation, or duress",
                "Sexual behavior of a public nature or that reflects lack of discretion or judgment",
            ],
            mitigating_conditions: &[
                "The behavior occurred prior to or during adolescence and there is no evidence of subsequent conduct",
                "The behavior no longer serves as a basis for coercion, exploitation, or duress",
            ],
            citation: "SEAD 4, Adjudicative Guidelines, Paragraph 12",
        },
        Guideline {
            code: GuidelineCode::J,
            title: "Guideline J: Criminal Conduct",
            concern: "Criminal activity creates doubt about a person's judgment, reliability, and \
                      trustworthiness. By its very nature, it calls into question a person's ability \
                      or willingness to comply with laws, rules, and regulations.",
            disqualifying_conditions: &[
                "A single serious crime or multiple lesser offenses",
                "Discharge or dismissal from the Armed Forces under dishonorable conditions",
                "Allegation or admission of criminal conduct, regardless of whether the person was formally charged",
            ],
            mitigating_conditions: &[
                "So much time has elapsed since the criminal behavior happened that it is unlikely to recur",
                "Evidence of successful rehabilitation (e.g., employment, community ties)",
                "Pressured or coerced into committing the act and those pressures are no longer present",
            ],
            citation: "SEAD 4, Adjudicative Guidelines, Paragraph 30",
        },
        Guideline {
            code: GuidelineCode::E,
            title: "Guideline E: Personal Conduct",
            concern: "Conduct involving questionable judgment, lack of candor, dishonesty, or unwillingness \
                      to comply with rules and regulations can raise questions about an individual's reliability, \
                      trustworthiness, and ability to protect classified or sensitive information.",
            disqualifying_conditions: &[
                "Deliberate omission or falsification of relevant facts from any personnel security questionnaire",
                "Personal conduct that creates vulnerability to coercion, exploitation, or duress",
            ],
            mitigating_conditions: &[
                "The individual made prompt, good-faith efforts to correct the omission before being confronted",
                "The offense is so minor, or so much time has passed, that it is unlikely to recur",
            ],
            citation: "SEAD 4, Adjudicative Guidelines, Paragraph 15",
        },
    ]
    .into_iter()
    .map(|g| (g.code, g))
    .collect()
});

/// Looks up a guideline by its code.
pub fn guideline(code: GuidelineCode) -> &'static Guideline {
    // Every GuidelineCode variant is seeded above.
    &GUIDELINES[&code]
}

/// Looks up a guideline by letter, case-insensitively.
///
/// Returns `None` for anything that is not a known guideline letter.
pub fn get_guideline(code: &str) -> Option<&'static Guideline> {
    code.parse::<GuidelineCode>().ok().map(guideline)
}

/// All guidelines in reporting order.
pub fn all_guidelines() -> impl Iterator<Item = &'static Guideline> {
    GuidelineCode::ALL.into_iter().map(guideline)
}
