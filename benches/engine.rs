use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use finhealth::domain::{ClientData, ClientProfile};
use finhealth::engine::{calculate_financial_metrics, generate_risk_assessment, Analysis};
use finhealth::report::{render_report, ReportOptions};
use finhealth::storage::{JsonProfileStore, ProfileStore};
use tempfile::tempdir;

fn sample_client() -> ClientData {
    ClientData {
        name: "Benchmark Household".into(),
        age: 44,
        dependents: 2,
        income: 135_000.0,
        spouse_income: Some(62_000.0),
        checking: 8_500.0,
        savings: 31_000.0,
        retirement_401k: 210_000.0,
        retirement_ira: 48_000.0,
        brokerage: 27_500.0,
        home_value: 520_000.0,
        mortgage: 310_000.0,
        car_loans: 18_000.0,
        credit_cards: 3_200.0,
        monthly_housing: 2_650.0,
        monthly_transportation: 700.0,
        monthly_food: 1_100.0,
        monthly_utilities: 420.0,
        monthly_insurance: 380.0,
        monthly_entertainment: 300.0,
        monthly_other: 450.0,
        life_insurance_coverage: 750_000.0,
        has_life_insurance: true,
        has_estate_plan: true,
        ..ClientData::default()
    }
}

fn bench_engines(c: &mut Criterion) {
    let client = sample_client();

    c.bench_function("calculate_financial_metrics", |b| {
        b.iter(|| calculate_financial_metrics(black_box(&client)))
    });

    let metrics = calculate_financial_metrics(&client);
    c.bench_function("generate_risk_assessment", |b| {
        b.iter(|| generate_risk_assessment(black_box(&client), black_box(&metrics)))
    });

    c.bench_function("analysis_and_report", |b| {
        b.iter_batched(
            || client.clone(),
            |client| render_report(&Analysis::run(client), &ReportOptions::default()),
            BatchSize::SmallInput,
        )
    });
}

fn bench_profile_io(c: &mut Criterion) {
    let dir = tempdir().expect("tempdir");
    let store = JsonProfileStore::new(dir.path().to_path_buf()).expect("store");
    let profile = Analysis::run(sample_client()).into_profile("Benchmark");
    store.save(&profile).expect("seed profile");

    c.bench_function("profile_save", |b| {
        b.iter(|| store.save(black_box(&profile)).expect("save profile"))
    });
    c.bench_function("profile_load", |b| {
        b.iter(|| -> ClientProfile { store.load(black_box("Benchmark")).expect("load profile") })
    });
}

criterion_group!(benches, bench_engines, bench_profile_io);
criterion_main!(benches);
