//! Human-readable design report.

use std::fmt;

use lander_design::DesignResult;

const RULE: &str = "======================================================================";
const THIN_RULE: &str = "----------------------------------------------------------------------";

/// Render the full design report, stamped with the current UTC time.
pub fn generate_report(result: &DesignResult) -> String {
    let generated = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
    render(result, &generated)
}

fn render(result: &DesignResult, generated: &str) -> String {
    Report { result, generated }.to_string()
}

struct Report<'a> {
    result: &'a DesignResult,
    generated: &'a str,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(out, self.result, self.generated)
    }
}

fn write_report(
    out: &mut fmt::Formatter<'_>,
    result: &DesignResult,
    generated: &str,
) -> fmt::Result {
    let p = &result.parameters;
    let s = &result.final_state;
    let d = &result.design;

    writeln!(out, "{RULE}")?;
    writeln!(out, "LUNAR LANDER DESIGN REPORT")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Generated       : {generated}")?;
    writeln!(out)?;

    writeln!(out, "Mission")?;
    writeln!(out, "{THIN_RULE}")?;
    writeln!(out, "Crew            : {}", p.n_crew)?;
    writeln!(out, "Duration        : {:.1} days", p.mission_duration_days)?;
    writeln!(out, "Δv descent      : {:.1} m/s", p.delta_v_descent_m_s)?;
    writeln!(out, "Δv ascent       : {:.1} m/s", p.delta_v_ascent_m_s)?;
    writeln!(out, "Isp             : {:.1} s", p.isp_s)?;
    writeln!(out, "Mixture ratio   : {:.2}", p.mixture_ratio)?;
    match p.payload_override_kg {
        Some(payload) => writeln!(out, "Payload         : {payload:.1} kg (fixed)")?,
        None => writeln!(out, "Payload         : statistical estimate")?,
    }
    writeln!(out)?;

    writeln!(out, "Convergence")?;
    writeln!(out, "{THIN_RULE}")?;
    writeln!(out, "Status          : converged")?;
    writeln!(out, "Iterations      : {}", s.iteration)?;
    writeln!(out, "Final change    : {:.3} kg (tolerance {:.3} kg)", s.delta_kg, result.tolerance_kg)?;
    writeln!(out)?;
    writeln!(
        out,
        "{:<6} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "Iter", "Total", "Payload", "Dry", "Propellant", "Change"
    )?;
    for step in &result.iteration_history {
        writeln!(
            out,
            "{:<6} {:>12.1} {:>12.1} {:>12.1} {:>12.1} {:>12.2}",
            step.iteration,
            step.total_mass_kg,
            step.payload_kg,
            step.dry_mass_kg,
            step.propellant_kg,
            step.delta_kg
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Mass summary")?;
    writeln!(out, "{THIN_RULE}")?;
    let pct = |v: f64| 100.0 * v / s.total_mass_kg;
    writeln!(out, "Total mass      : {:>10.1} kg", s.total_mass_kg)?;
    writeln!(out, "Payload         : {:>10.1} kg ({:>5.1}%)", s.payload_kg, pct(s.payload_kg))?;
    writeln!(out, "Dry mass        : {:>10.1} kg ({:>5.1}%)", s.dry_mass_kg, pct(s.dry_mass_kg))?;
    writeln!(out, "Propellant      : {:>10.1} kg ({:>5.1}%)", s.propellant_kg, pct(s.propellant_kg))?;
    writeln!(out, "Inert mass      : {:>10.1} kg", s.inert_mass_kg)?;
    writeln!(out, "Mass ratio      : {:>10.3}", d.fractions.mass_ratio)?;
    writeln!(
        out,
        "Payload needed  : {:.1} to {:.1} kg (crew, consumables, cargo)",
        d.payload_requirements.min_kg, d.payload_requirements.max_kg
    )?;
    writeln!(out)?;

    writeln!(out, "Dry mass breakdown")?;
    writeln!(out, "{THIN_RULE}")?;
    for (name, mass) in [
        ("Subsystems", s.subsystems_kg),
        ("Structure", s.structure_kg),
        ("Landing gear", s.landing_gear_kg),
        ("Engines", s.engines_kg),
        ("Tanks", s.tanks_kg),
    ] {
        writeln!(out, "{name:<16}: {mass:>10.1} kg")?;
    }
    for (name, sub) in d.subsystems.entries() {
        let volume = sub
            .volume_m3
            .map(|v| format!("{v:.2} m³"))
            .unwrap_or_else(|| "-".to_string());
        let power = sub
            .power_w
            .map(|w| format!("{w:.0} W"))
            .unwrap_or_else(|| "-".to_string());
        writeln!(out, "  {name:<14}: {:>10.1} kg  {volume:>10}  {power:>8}", sub.mass_kg)?;
    }
    writeln!(out)?;

    let engine = &d.propulsion.engine;
    writeln!(out, "Propulsion")?;
    writeln!(out, "{THIN_RULE}")?;
    writeln!(
        out,
        "Propellant      : {:.1} kg (descent {:.1}, ascent {:.1})",
        d.propellant.total_kg, d.propellant.descent_kg, d.propellant.ascent_kg
    )?;
    writeln!(
        out,
        "LH2 / LOX       : {:.1} kg / {:.1} kg",
        d.propellant.fuel.mass_kg, d.propellant.oxidizer.mass_kg
    )?;
    writeln!(
        out,
        "Engines         : {} × {:.1} kN (total {:.1} kN)",
        engine.engine_count,
        engine.thrust_per_engine_n / 1_000.0,
        engine.thrust_total_n / 1_000.0
    )?;
    writeln!(
        out,
        "Nozzle          : throat {:.1} mm, exit {:.1} mm, length {:.3} m",
        engine.throat_diameter_m * 1_000.0,
        engine.exit_diameter_m * 1_000.0,
        engine.nozzle_length_m
    )?;
    writeln!(
        out,
        "Performance     : ideal Isp {:.1} s, burn time {:.0} s",
        engine.ideal_isp_s, engine.burn_time_s
    )?;
    for (label, tank) in [
        ("LH2 tank", &d.propulsion.fuel_tank),
        ("LOX tank", &d.propulsion.oxidizer_tank),
    ] {
        writeln!(
            out,
            "{label:<16}: {:.2} m³, r = {:.3} m, R = {:.3} m, wall {:.2} mm, {:.1} kg",
            tank.volume_m3,
            tank.minor_radius_m,
            tank.major_radius_m,
            tank.wall_thickness_m * 1_000.0,
            tank.mass_kg
        )?;
    }
    writeln!(out, "{RULE}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lander_design::{LanderDesigner, MissionParameters};

    #[test]
    fn report_lists_every_pass_and_section() {
        let result = LanderDesigner::new(Default::default())
            .unwrap()
            .iterate_design(10.0, 100, false)
            .unwrap();
        let text = render(&result, "2026-01-01 00:00:00 UTC");

        assert!(text.starts_with(RULE));
        assert!(text.contains("Generated       : 2026-01-01 00:00:00 UTC"));
        assert!(text.contains("Status          : converged"));
        assert!(text.contains(&format!("Iterations      : {}", result.iterations())));
        assert!(text.contains(&format!(
            "Total mass      : {:>10.1} kg",
            result.final_state.total_mass_kg
        )));
        for section in ["Mission", "Mass summary", "Dry mass breakdown", "Propulsion", "LOX tank"] {
            assert!(text.contains(section), "missing {section}");
        }
        let table_rows = text
            .lines()
            .filter(|l| l.starts_with(|c: char| c.is_ascii_digit()))
            .count();
        assert_eq!(table_rows, result.iteration_history.len());
    }

    #[test]
    fn fixed_payload_is_flagged() {
        let params = MissionParameters {
            payload_override_kg: Some(1_060.0),
            ..MissionParameters::default()
        };
        let result = LanderDesigner::new(params)
            .unwrap()
            .iterate_design(10.0, 100, false)
            .unwrap();
        assert!(generate_report(&result).contains("Payload         : 1060.0 kg (fixed)"));
    }
}
