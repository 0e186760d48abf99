//! Chronos Mirror Headless Harness
//!
//! Validates the life-statistics engine without any UI.
//! Runs entirely in-process — no storage, no rendering, no browser.
//!
//! Usage:
//!   cargo run -p chronos-simtest
//!   cargo run -p chronos-simtest -- --verbose
//!   cargo run -p chronos-simtest -- --profile me.json --watch 10
//!
//! Set `RUST_LOG=info` to see configuration decisions.

mod config;

use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chronos_logic::age::{calendar_year_difference, completed_years};
use chronos_logic::constants::units::SECONDS_PER_WEEK;
use chronos_logic::grid::{LifeGrid, WeekCell};
use chronos_logic::summary::{group_thousands, ShareSummary};
use chronos_logic::ticker::Ticker;
use chronos_logic::{classify_age_phase, compute_life_stats, AgePhase, LifeStats, Profile};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

use crate::config::{load_profile, HarnessArgs};

/// Seed for the randomized sweep, fixed so failures reproduce.
const SWEEP_SEED: u64 = 0x5eed_c4e0;
const SWEEP_SAMPLES: usize = 10_000;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match HarnessArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(2);
        }
    };

    let now = Utc::now();
    let today = now.date_naive();

    let profile = match load_profile(args.profile_path.as_deref(), today) {
        Ok(profile) => profile,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(2);
        }
    };

    println!("=== Chronos Mirror Engine Harness ===\n");

    let mut results = Vec::new();

    // 1. Reference scenarios
    results.extend(validate_scenarios(args.verbose));

    // 2. Phase boundary table
    results.extend(validate_phase_table(args.verbose));

    // 3. Randomized invariant sweep
    results.extend(validate_random_sweep(args.verbose));

    // 4. Grid, summary and ticker for the configured profile
    results.extend(validate_profile_views(&profile, now, args.verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || args.verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    print_snapshot(&profile, now, today);

    if args.watch_seconds > 0 {
        log::info!("watching countdown for {} seconds", args.watch_seconds);
        println!();
        watch(
            &profile,
            args.watch_seconds,
            Utc::now,
            || std::thread::sleep(StdDuration::from_secs(1)),
            |line| println!("{line}"),
        );
    }

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Reference Scenarios ──────────────────────────────────────────────

fn validate_scenarios(verbose: bool) -> Vec<TestResult> {
    println!("--- Reference Scenarios ---");
    let mut results = Vec::new();
    let Some(born) = NaiveDate::from_ymd_opt(1984, 6, 1) else {
        return results;
    };

    // Half of an 80-year horizon
    let p = Profile::new("Half", born, 80);
    let half = compute_life_stats(&p, p.birth_instant() + Duration::weeks(2080));
    results.push(TestResult {
        name: "scenario_half_life".into(),
        passed: half.total_weeks() == 4160
            && half.weeks_passed == 2080
            && format!("{:.4}", half.percentage_passed) == "50.0000",
        detail: format!(
            "{} of {} weeks, {:.4}%",
            half.weeks_passed,
            half.total_weeks(),
            half.percentage_passed
        ),
    });

    // Born this instant
    let newborn = compute_life_stats(&p, p.birth_instant());
    results.push(TestResult {
        name: "scenario_born_now".into(),
        passed: newborn.weeks_passed == 0
            && newborn.percentage_passed == 0.0
            && newborn.weeks_remaining == 4160,
        detail: format!("{} weeks remaining", newborn.weeks_remaining),
    });

    // Birthday still in the future
    let unborn = compute_life_stats(&p, p.birth_instant() - Duration::days(400));
    results.push(TestResult {
        name: "scenario_future_birthday".into(),
        passed: unborn.weeks_passed == 0 && unborn.percentage_passed == 0.0,
        detail: "400 days before birth → 0 weeks, 0%".into(),
    });

    // Zero-length horizon
    let degenerate = Profile::new("Zero", born, 0);
    let zero = compute_life_stats(&degenerate, p.birth_instant() + Duration::weeks(10));
    results.push(TestResult {
        name: "scenario_zero_horizon".into(),
        passed: zero.percentage_passed == 100.0 && zero.weeks_remaining == 0,
        detail: format!("{}% passed", zero.percentage_passed),
    });

    // Horizon overrun
    let overrun = compute_life_stats(&p, p.birth_instant() + Duration::weeks(5000));
    results.push(TestResult {
        name: "scenario_horizon_overrun".into(),
        passed: overrun.weeks_passed == 4160 && overrun.seconds_remaining == 0,
        detail: format!(
            "weeks passed clamped to {}, {} seconds left",
            overrun.weeks_passed, overrun.seconds_remaining
        ),
    });

    if verbose {
        println!("  Snapshots ({} born {}):", p.name, p.birthday);
        for (label, stats) in [
            ("born", &newborn),
            ("-400d", &unborn),
            ("+2080w", &half),
            ("+5000w", &overrun),
        ] {
            println!(
                "    {:7} {:>4} lived / {:>4} left · {:8.4}%",
                label, stats.weeks_passed, stats.weeks_remaining, stats.percentage_passed
            );
        }
    }

    results
}

// ── 2. Phase Table ──────────────────────────────────────────────────────

fn validate_phase_table(verbose: bool) -> Vec<TestResult> {
    println!("--- Life Phases ---");
    let mut results = Vec::new();

    let table = [
        (17, AgePhase::Childhood),
        (18, AgePhase::Education),
        (24, AgePhase::Education),
        (25, AgePhase::Prime),
        (44, AgePhase::Prime),
        (45, AgePhase::Wisdom),
        (64, AgePhase::Wisdom),
        (65, AgePhase::Retirement),
    ];
    let mismatches: Vec<_> = table
        .iter()
        .filter(|(age, expected)| classify_age_phase(*age) != *expected)
        .collect();
    results.push(TestResult {
        name: "phase_boundaries".into(),
        passed: mismatches.is_empty(),
        detail: if mismatches.is_empty() {
            format!("{} boundary ages classified exactly", table.len())
        } else {
            format!("{} boundary mismatches: {:?}", mismatches.len(), mismatches)
        },
    });

    results.push(TestResult {
        name: "phase_extremes".into(),
        passed: classify_age_phase(i64::MIN) == AgePhase::Childhood
            && classify_age_phase(i64::MAX) == AgePhase::Retirement,
        detail: "i64::MIN → Childhood, i64::MAX → Retirement".into(),
    });

    if verbose {
        println!("  Phase starts:");
        for phase in AgePhase::ALL {
            match phase.starts_at() {
                Some(age) => println!("    {:13} from {}", phase.name(), age),
                None => println!("    {:13} from birth", phase.name()),
            }
        }
    }

    results
}

// ── 3. Randomized Sweep ─────────────────────────────────────────────────

fn validate_random_sweep(verbose: bool) -> Vec<TestResult> {
    println!("--- Invariant Sweep ({} samples) ---", SWEEP_SAMPLES);
    let mut results = Vec::new();
    let mut rng = StdRng::seed_from_u64(SWEEP_SEED);

    let mut partition_failures = 0usize;
    let mut unit_failures = 0usize;
    let mut monotonic_failures = 0usize;
    let mut clamp_failures = 0usize;

    for i in 0..SWEEP_SAMPLES {
        // 1900-01-01 ..= 2099-12-31
        let days = rng.gen_range(693_596..=766_644);
        let Some(birthday) = NaiveDate::from_num_days_from_ce_opt(days) else {
            continue;
        };
        let expected_age = rng.gen_range(30..=120u32);
        let p = Profile::new("Sweep", birthday, expected_age);
        let born = p.birth_instant();

        let offset = rng.gen_range(0..=150 * 52 * SECONDS_PER_WEEK as i64);
        let step = rng.gen_range(1..=2 * SECONDS_PER_WEEK as i64);
        let s1 = compute_life_stats(&p, born + Duration::seconds(offset));
        let s2 = compute_life_stats(&p, born + Duration::seconds(offset + step));

        let total = expected_age as u64 * 52;
        if s1.weeks_passed > total || s1.weeks_passed + s1.weeks_remaining != total {
            partition_failures += 1;
        }
        if !units_consistent(&s1) {
            unit_failures += 1;
        }
        if s2.weeks_passed < s1.weeks_passed || s2.seconds_remaining > s1.seconds_remaining {
            monotonic_failures += 1;
        }

        let before = compute_life_stats(&p, born - Duration::seconds(step));
        if before.weeks_passed != 0 || before.percentage_passed != 0.0 {
            clamp_failures += 1;
        }

        if verbose && i < 5 {
            println!(
                "  sample {}: born {}, horizon {}y, +{}s → {}/{} weeks, {:.4}%",
                i,
                birthday,
                expected_age,
                offset,
                s1.weeks_passed,
                total,
                s1.percentage_passed
            );
        }
    }

    for (name, failures, what) in [
        ("sweep_partition", partition_failures, "passed + remaining == horizon"),
        ("sweep_units", unit_failures, "days/hours/seconds chain exactly"),
        ("sweep_monotonic", monotonic_failures, "countdown never increases"),
        ("sweep_clamp", clamp_failures, "before birth → 0 weeks, 0%"),
    ] {
        results.push(TestResult {
            name: name.into(),
            passed: failures == 0,
            detail: format!("{} ({} failures)", what, failures),
        });
    }

    results
}

fn units_consistent(stats: &LifeStats) -> bool {
    stats.days_remaining == stats.weeks_remaining * 7
        && stats.hours_remaining == stats.days_remaining * 24
        && stats.seconds_remaining == stats.hours_remaining * 3600
}

// ── 4. Profile Views ────────────────────────────────────────────────────

fn validate_profile_views(profile: &Profile, now: DateTime<Utc>, verbose: bool) -> Vec<TestResult> {
    println!("--- Grid, Summary & Ticker ({}) ---", profile.name);
    let mut results = Vec::new();
    let stats = compute_life_stats(profile, now);

    let grid = LifeGrid::new(&stats);
    let lived = grid.cells().filter(|c| *c == WeekCell::Lived).count() as u64;
    let current = grid.cells().filter(|c| *c == WeekCell::Current).count();
    let expected_current = usize::from(!stats.is_exhausted());
    results.push(TestResult {
        name: "grid_matches_stats".into(),
        passed: grid.len() == stats.total_weeks()
            && lived == stats.weeks_passed
            && current == expected_current,
        detail: format!(
            "{} cells, {} lived, {} current",
            grid.len(),
            lived,
            current
        ),
    });

    let summary = ShareSummary::new(profile, &stats, now.date_naive());
    results.push(TestResult {
        name: "summary_matches_stats".into(),
        passed: summary.weeks_remaining == group_thousands(stats.weeks_remaining)
            && summary.percentage_precise == format!("{:.4}", stats.percentage_passed),
        detail: format!(
            "{}% / {} weeks → {}.png",
            summary.percentage_precise, summary.weeks_remaining, summary.file_stem
        ),
    });

    let ticks: Vec<_> = Ticker::every_second(profile, now).take(5).collect();
    let ticks_ok = ticks
        .iter()
        .all(|(at, s)| *s == compute_life_stats(profile, *at));
    results.push(TestResult {
        name: "ticker_matches_direct_calls".into(),
        passed: ticks_ok && ticks.len() == 5,
        detail: "5 one-second ticks recomputed independently".into(),
    });

    if verbose {
        println!("  Life grid (one row per year):");
        for line in grid.render_ascii().lines() {
            println!("    {}", line);
        }
    }

    results
}

// ── Snapshot output ─────────────────────────────────────────────────────

fn print_snapshot(profile: &Profile, now: DateTime<Utc>, today: NaiveDate) {
    let stats = compute_life_stats(profile, now);
    let summary = ShareSummary::new(profile, &stats, today);
    let age = completed_years(profile.birthday, today);

    println!("\n=== {} ===", summary.display_name);
    println!(
        "  born {} · age {} ({} by calendar year) · {}",
        profile.birthday,
        age,
        calendar_year_difference(profile.birthday, today),
        summary.phase
    );
    println!("  life progress:    {}%", summary.percentage_precise);
    println!(
        "  weeks:            {} lived / {} remaining",
        group_thousands(stats.weeks_passed),
        summary.weeks_remaining
    );
    println!("  days remaining:   {}", group_thousands(stats.days_remaining));
    println!("  hours remaining:  {}", group_thousands(stats.hours_remaining));
    println!("  seconds left:     {}", group_thousands(stats.seconds_remaining));
    println!("  asleep:           ≈ {:.1} years", stats.sleep_remaining_years);
    println!("  at work:          ≈ {:.1} years", stats.work_remaining_years);
}

/// One countdown line per tick. The clock is read again after every pause,
/// so the lines follow the wall clock rather than a running sum of periods.
fn watch(
    profile: &Profile,
    ticks: u32,
    mut clock: impl FnMut() -> DateTime<Utc>,
    mut pause: impl FnMut(),
    mut emit: impl FnMut(String),
) {
    for i in 0..ticks {
        if i > 0 {
            pause();
        }
        let at = clock();
        let stats = compute_life_stats(profile, at);
        emit(format!(
            "  {} · {:.4}% · {} seconds left",
            at.format("%H:%M:%S"),
            stats.percentage_passed,
            group_thousands(stats.seconds_remaining)
        ));
    }
}
