//! Performance benchmarks for the statutory payroll engine.
//!
//! This benchmark suite verifies that the calculation core stays cheap
//! enough to run per-keystroke in a payroll preview screen:
//! - Single band walk: < 1μs mean
//! - Full gross-to-net calculation: < 10μs mean
//! - Payroll preview over 1,000 assignments: < 1ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use payroll_engine::calculation::{
    PayrollOptions, calculate_income_tax, calculate_payroll_from_gross,
};
use payroll_engine::config::RateConfiguration;
use payroll_engine::models::{EarningLine, Employee, SalaryStructure, StructureAssignment};
use payroll_engine::resolver::build_payroll_preview;

fn bench_employee() -> Employee {
    Employee {
        id: "emp_bench_001".to_string(),
        name: "Bench Employee".to_string(),
        company: "Acme Zambia Ltd".to_string(),
    }
}

fn bench_structure() -> SalaryStructure {
    SalaryStructure {
        name: "Monthly Standard 2024".to_string(),
        company: "Acme Zambia Ltd".to_string(),
        earnings: vec![
            EarningLine {
                component: "Basic".to_string(),
                amount: Decimal::from(8_000),
                is_tax_applicable: true,
                depends_on_payment_days: true,
                formula: None,
            },
            EarningLine {
                component: "Housing Allowance".to_string(),
                amount: Decimal::from(2_000),
                is_tax_applicable: true,
                depends_on_payment_days: false,
                formula: None,
            },
        ],
        deductions: vec![],
    }
}

/// Creates `count` assignments for one employee with ascending dates.
fn bench_assignments(count: usize) -> Vec<StructureAssignment> {
    (0..count)
        .map(|i| StructureAssignment {
            employee_id: "emp_bench_001".to_string(),
            structure_name: "Monthly Standard 2024".to_string(),
            company: "Acme Zambia Ltd".to_string(),
            from_date: NaiveDate::from_ymd_opt(2000 + (i / 12) as i32, (i % 12) as u32 + 1, 1)
                .unwrap(),
        })
        .collect()
}

/// Benchmark: progressive band walk over the default table.
///
/// Target: < 1μs mean
fn bench_band_walk(c: &mut Criterion) {
    let bands = RateConfiguration::default().tax_bands;
    let income = Decimal::from(9_500);

    c.bench_function("income_tax_band_walk", |b| {
        b.iter(|| black_box(calculate_income_tax(black_box(income), &bands)))
    });
}

/// Benchmark: full gross-to-net calculation including the audit trace.
///
/// Target: < 10μs mean
fn bench_gross_to_net(c: &mut Criterion) {
    let options = PayrollOptions::default();
    let gross = Decimal::from(10_000);

    c.bench_function("gross_to_net", |b| {
        b.iter(|| black_box(calculate_payroll_from_gross(black_box(gross), &options)))
    });
}

/// Benchmark: payroll preview with growing assignment history.
fn bench_preview_scaling(c: &mut Criterion) {
    let employee = bench_employee();
    let structure = bench_structure();
    let options = PayrollOptions::default();
    let as_of = NaiveDate::from_ymd_opt(2100, 1, 1).unwrap();

    let mut group = c.benchmark_group("preview_scaling");

    for count in [1usize, 10, 100, 1_000] {
        let assignments = bench_assignments(count);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("assignments", count), &count, |b, _| {
            b.iter(|| {
                let result = build_payroll_preview(
                    &employee,
                    as_of,
                    &assignments,
                    |_| Some(structure.clone()),
                    &options,
                );
                black_box(result)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_band_walk,
    bench_gross_to_net,
    bench_preview_scaling,
);
criterion_main!(benches);
