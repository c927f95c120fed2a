//! Plain-text statement of a determination
//!
//! Amounts use the Belgian French currency layout: narrow no-break space between
//! thousands, decimal comma, no-break space before the euro sign.

use crate::determination::ComputationResult;
use crate::numeric::round_currency;
use crate::profile::HouseholdSituation;

const THOUSANDS_SEPARATOR: char = '\u{202F}';
const CURRENCY_SUFFIX: &str = "\u{A0}€";

/// Format an amount as `1 234,56 €`
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("0,00{}", CURRENCY_SUFFIX);
    }

    let cents = (value.abs() * 100.0).round() as u64;
    let units = (cents / 100).to_string();
    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, digit) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}{},{:02}{}", sign, grouped, cents % 100, CURRENCY_SUFFIX)
}

fn category_label(situation: HouseholdSituation) -> &'static str {
    match situation {
        HouseholdSituation::Isole => "Isolé",
        HouseholdSituation::Cohabitant => "Cohabitant",
        HouseholdSituation::Famille => "Famille",
    }
}

fn line(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}

fn row(out: &mut String, label: &str, annual: f64) {
    line(
        out,
        &format!(
            "  {:<34}{:>16}{:>16}",
            label,
            format_currency(round_currency(annual / 12.0)),
            format_currency(annual)
        ),
    );
}

fn field(out: &mut String, label: &str, value: &str) {
    line(out, &format!("{} : {}", label, value));
}

/// Render the summary of a result, section by section
pub fn render_statement(result: &ComputationResult) -> String {
    let mut out = String::new();
    let summary = &result.summary;

    if result.eligible {
        line(&mut out, "ÉLIGIBLE AU REVENU D'INTÉGRATION");
        field(&mut out, "Montant mensuel", &format_currency(result.monthly_entitlement));
        field(&mut out, "Montant annuel", &format_currency(result.annual_entitlement));
    } else {
        line(&mut out, "NON ÉLIGIBLE AU REVENU D'INTÉGRATION");
    }
    field(&mut out, "Date de référence", &result.reference_date.format("%Y-%m-%d").to_string());

    line(&mut out, "\nSynthèse des revenus");
    line(&mut out, &format!("  {:<34}{:>16}{:>16}", "Rubrique", "Mensuel", "Annuel"));
    line(&mut out, "Ressources professionnelles");
    let pro = &result.professional;
    row(&mut out, "Revenu net demandeur", pro.applicant.net_after_exemption_annual);
    row(
        &mut out,
        "Revenu net conjoint",
        pro.partner.map_or(0.0, |p| p.net_after_exemption_annual),
    );
    row(&mut out, "Revenus de remplacement", round_currency(pro.replacement.total_monthly * 12.0));
    row(&mut out, "Avantages en nature", round_currency(pro.in_kind_monthly * 12.0));
    if result.is_prorated() {
        row(&mut out, "Total professionnel proratisé", pro.annual);
    }
    line(&mut out, "Autres ressources");
    row(&mut out, "Ressources diverses", result.ancillary.misc_annual);
    row(&mut out, "Biens immobiliers", result.real_estate.annual);
    row(&mut out, "Biens mobiliers", result.movable_assets.annual);
    row(&mut out, "Cessions de biens", result.cessions.annual);
    row(&mut out, "Cohabitants", result.cohabitants.annual);
    row(&mut out, "Total des ressources", summary.total_annual_resources);

    line(&mut out, "\nCalcul détaillé");
    field(&mut out, "Seuil RI annuel", &format_currency(summary.threshold));
    field(
        &mut out,
        "Catégorie",
        &format!("{} ({})", result.category.number(), category_label(result.situation)),
    );
    field(&mut out, "Exonération supplémentaire", &format_currency(summary.supplemental_exemption));
    field(&mut out, "Ressources après exonération", &format_currency(summary.retained_resources));
    field(&mut out, "Revenu d'intégration annuel", &format_currency(result.annual_entitlement));
    field(&mut out, "Revenu d'intégration mensuel", &format_currency(result.monthly_entitlement));

    if let Some(days) = summary.days_counted.filter(|d| *d > 0) {
        line(&mut out, "\nCalcul prorata jours");
        field(
            &mut out,
            "Jours pris en compte",
            &format!("{} / {} jours", days, summary.days_in_month),
        );
        field(
            &mut out,
            "Revenu d'intégration proratisé",
            &format_currency(result.prorated_monthly_entitlement),
        );
    }

    if !result.explanations.is_empty() {
        line(&mut out, "\nExplications");
        for explanation in &result.explanations {
            line(&mut out, &format!("- {}", explanation));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::determination::DeterminationEngine;
    use crate::profile::{HouseholdProfile, IncomeLine};
    use chrono::NaiveDate;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(1234.56), "1\u{202F}234,56\u{A0}€");
        assert_eq!(format_currency(1_234_567.891), "1\u{202F}234\u{202F}567,89\u{A0}€");
        assert_eq!(format_currency(335.03), "335,03\u{A0}€");
        assert_eq!(format_currency(100.0), "100,00\u{A0}€");
    }

    #[test]
    fn test_format_currency_edge_values() {
        assert_eq!(format_currency(0.0), "0,00\u{A0}€");
        assert_eq!(format_currency(-0.001), "0,00\u{A0}€");
        assert_eq!(format_currency(f64::NAN), "0,00\u{A0}€");
        assert_eq!(format_currency(-250.0), "-250,00\u{A0}€");
    }

    fn result_for(monthly: f64, days: Option<u32>) -> ComputationResult {
        let date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        let mut profile = HouseholdProfile::new(date, HouseholdSituation::Isole);
        profile.days_counted_in_period = days;
        profile.applicant.income_lines.push(IncomeLine {
            label: "Salaire".into(),
            taxable_amount: monthly,
            exempt_amount: 0.0,
        });
        DeterminationEngine::default().determine(&profile).unwrap()
    }

    #[test]
    fn test_statement_for_eligible_applicant() {
        let text = render_statement(&result_for(1000.0, None));
        assert!(text.starts_with("ÉLIGIBLE AU REVENU D'INTÉGRATION"));
        assert!(text.contains("Montant mensuel : 335,03\u{A0}€"));
        assert!(text.contains("Catégorie : 2 (Isolé)"));
        assert!(text.contains("Exonération supplémentaire : -250,00\u{A0}€"));
        assert!(text.contains("12\u{202F}000,00\u{A0}€"));
        assert!(!text.contains("Calcul prorata jours"));
    }

    #[test]
    fn test_statement_for_ineligible_applicant() {
        let text = render_statement(&result_for(2000.0, None));
        assert!(text.starts_with("NON ÉLIGIBLE"));
        assert!(!text.contains("Montant mensuel"));
        assert!(text.contains("Revenu d'intégration mensuel : 0,00\u{A0}€"));
        assert!(text.contains("≥ base annuelle RI"));
    }

    #[test]
    fn test_statement_sections_in_order() {
        let text = render_statement(&result_for(1000.0, None));
        assert!(text.ends_with('\n'));

        let headings: Vec<&str> = text
            .lines()
            .filter(|l| matches!(*l, "Synthèse des revenus" | "Calcul détaillé" | "Explications"))
            .collect();
        assert_eq!(headings, vec!["Synthèse des revenus", "Calcul détaillé", "Explications"]);
        assert!(text.contains("\n\nCalcul détaillé\n"));
        assert!(text.contains("- Base annuelle RI (A) = 15770.41€\n"));
    }

    #[test]
    fn test_statement_shows_prorating() {
        let text = render_statement(&result_for(1000.0, Some(14)));
        assert!(text.contains("Jours pris en compte : 14 / 28 jours"));
        assert!(text.contains("Revenu d'intégration proratisé : 417,52\u{A0}€"));
    }
}
