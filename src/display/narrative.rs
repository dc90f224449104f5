use crate::compute::result::{BreakdownStep, Outcome, RateTrend};
use crate::display::format::{chf, percent, signed_percent};
use std::fmt::Write;

/// The pipeline figures the narrative and breakdown are rendered from.
#[derive(Debug, Clone, PartialEq)]
pub struct Figures {
    pub original_rate: f64,
    pub current_rate: f64,
    pub rate_differential: f64,
    pub interest_reduction_percent: f64,
    pub years_since_adjustment: f64,
    pub cost_increase_percent: f64,
    pub inflation_adjustment_percent: f64,
    pub effective_reduction_percent: f64,
    pub current_rent: f64,
    pub new_rent: f64,
    pub monthly_savings: f64,
    pub annual_savings: f64,
    pub rate_trend: RateTrend,
    pub outcome: Outcome,
}

/// Renders the German justification: rate commentary, elapsed time and
/// cost commentary, inflation commentary, then the conclusion.
pub fn explain(f: &Figures) -> String {
    let mut out = String::new();

    match f.rate_trend {
        RateTrend::Fell => {
            let _ = write!(
                out,
                "Der hypothekarische Referenzzinssatz ist seit Vertragsabschluss von {:.2}% auf {:.2}% gesunken. ",
                f.original_rate, f.current_rate
            );
            let _ = write!(
                out,
                "Gemäss Art. 270a OR entspricht diese Senkung um {} einer möglichen Mietzinsreduktion von {}.\n\n",
                percent(f.rate_differential.abs()),
                percent(f.interest_reduction_percent)
            );
        }
        RateTrend::Rose => {
            let _ = write!(
                out,
                "Der hypothekarische Referenzzinssatz ist seit Vertragsabschluss von {:.2}% auf {:.2}% gestiegen. ",
                f.original_rate, f.current_rate
            );
            let _ = write!(
                out,
                "Dies würde theoretisch eine Mieterhöhung um {} rechtfertigen.\n\n",
                percent(f.interest_reduction_percent.abs())
            );
        }
        RateTrend::Unchanged => {
            let _ = write!(
                out,
                "Der hypothekarische Referenzzinssatz ist seit Vertragsabschluss unverändert bei {:.2}% geblieben.\n\n",
                f.original_rate
            );
        }
    }

    if f.years_since_adjustment > 0.0 {
        let _ = write!(
            out,
            "Seit der letzten Mietanpassung sind {:.1} Jahre vergangen. ",
            f.years_since_adjustment
        );
        let _ = write!(
            out,
            "In dieser Zeit sind geschätzte Kostensteigerungen von {} angefallen.\n\n",
            percent(f.cost_increase_percent)
        );
    }

    if f.inflation_adjustment_percent > 0.0 {
        let _ = write!(
            out,
            "Die Teuerung (Landesindex der Konsumentenpreise) wird mit {} berücksichtigt.\n\n",
            percent(f.inflation_adjustment_percent)
        );
    }

    match f.outcome {
        Outcome::Reduction => {
            let _ = write!(
                out,
                "**Ergebnis:** Nach Abzug aller Faktoren ergibt sich eine mögliche Mietzinssenkung von {}. ",
                percent(f.effective_reduction_percent)
            );
            let _ = write!(
                out,
                "Ihre monatliche Nettomiete könnte von {} auf {} gesenkt werden. ",
                chf(f.current_rent),
                chf(f.new_rent)
            );
            let _ = write!(
                out,
                "Das entspricht einer monatlichen Ersparnis von {} bzw. {} pro Jahr.",
                chf(f.monthly_savings),
                chf(f.annual_savings)
            );
        }
        Outcome::Increase => {
            out.push_str("**Ergebnis:** Nach Berücksichtigung aller Faktoren ergibt sich leider keine Mietzinssenkung. ");
            out.push_str("Die Kostensteigerungen und die Teuerung überwiegen eine allfällige Zinssenkung.");
        }
        Outcome::Neutral => {
            out.push_str("**Ergebnis:** Die verschiedenen Faktoren gleichen sich aus. ");
            out.push_str("Eine Mietzinsänderung ist nicht gerechtfertigt.");
        }
    }

    out
}

/// The five-step breakdown. Cost and inflation are shown as negative
/// adjustments.
pub fn breakdown(f: &Figures) -> Vec<BreakdownStep> {
    let step = |step: &str, value: String, explanation: String| BreakdownStep {
        step: step.to_string(),
        value,
        explanation,
    };

    vec![
        step(
            "1. Referenzzinssatz-Differenz",
            percent(f.rate_differential),
            "Änderung des hypothekarischen Referenzzinssatzes seit Vertragsbeginn".into(),
        ),
        step(
            "2. Zinsbedingte Reduktion",
            signed_percent(f.interest_reduction_percent),
            "Pro 0.25% Zinssenkung ergibt sich 2.91% Mietreduktion (Art. 270a OR)".into(),
        ),
        step(
            "3. Kostensteigerungen",
            signed_percent(-f.cost_increase_percent),
            format!("Geschätzte Kostensteigerung über {:.1} Jahre", f.years_since_adjustment),
        ),
        step(
            "4. Teuerungsausgleich",
            signed_percent(-f.inflation_adjustment_percent),
            "Anpassung basierend auf dem Landesindex der Konsumentenpreise (LIK)".into(),
        ),
        step(
            "5. Effektive Reduktion",
            signed_percent(f.effective_reduction_percent),
            "Gesamtbilanz aller Faktoren".into(),
        ),
    ]
}
