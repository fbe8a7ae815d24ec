//! Performance benchmarks for the reconstitution calculator
//!
//! This benchmark measures the two public entry points on growing inputs
//! to verify their scaling characteristics.
//!
//! # What We're Measuring
//!
//! 1. **`compute`** (single evaluation):
//!    - O(number of components)
//!    - One breakdown row allocated per component
//!
//! 2. **`sweep`** (grid evaluation):
//!    - O(grid points), a handful of arithmetic operations per point
//!    - With the `parallel` feature, grids past the runtime threshold go
//!      through Rayon
//!
//! # Expected Results
//!
//! Both entry points should scale linearly with their input size. A
//! super-linear trend points at allocation overhead; investigate with a
//! profiler before reaching for parallelism.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all calculator benchmarks
//! cargo bench --bench calculator_performance
//!
//! # Run only compute scaling
//! cargo bench --bench calculator_performance compute
//!
//! # Compare sequential vs parallel sweep dispatch
//! cargo bench --bench calculator_performance --features parallel sweep
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use recon_rs::calculator::{ProcessParameters, ReconstitutionCalculator, VolumeSweep};
use recon_rs::formulation::{Component, Formulation};

// =================================================================================================
// Fixtures
// =================================================================================================

/// Build a formulation with a drug plus `excipients` generic excipients
///
/// # Why This Shape?
///
/// - **Realism**: production formulations carry 3–10 excipients
/// - **Scalability**: stress the per-component loop far past realistic sizes
/// - **Pure benchmark**: isolates calculator cost (no formulation reuse)
fn formulation_with_excipients(excipients: usize) -> Formulation {
    let mut formulation = Formulation::new(Component::drug("mAb", 8.0));
    for i in 0..excipients {
        formulation.add(Component::excipient(format!("Excipient {}", i), 0.5));
    }
    formulation
}

fn benchmark_parameters() -> ProcessParameters {
    // Fill 8 mL at 2000 mg/mL so even 1000 excipients × 0.5 mg/mL stay
    // below the solution density
    ProcessParameters::with_wfi_diluent(8.0, 2000.0, 4.0, 2000.0)
}

// =================================================================================================
// Benchmark Functions
// =================================================================================================

/// Benchmark `compute` with growing component counts
///
/// # Test Configuration
///
/// - **Excipients**: 5, 50, 500 (plus the drug component)
/// - **Process**: fixed, so only the per-component loop grows
///
/// # Expected Scaling
///
/// Time should scale linearly with the component count; the per-call floor
/// is dominated by the breakdown-row allocations.
fn benchmark_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("Reconstitution Compute");
    let calculator = ReconstitutionCalculator::new();
    let params = benchmark_parameters();

    for excipients in [5, 50, 500].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(excipients),
            excipients,
            |b, &excipients| {
                // Setup phase (NOT measured by criterion)
                let formulation = formulation_with_excipients(excipients);

                // Measurement phase
                b.iter(|| {
                    calculator
                        .compute(black_box(&formulation), black_box(&params))
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

/// Benchmark `sweep` with growing grid sizes
///
/// # Test Configuration
///
/// - **Grid points**: 100, 10 000, 100 000
/// - **Formulation**: the drug plus 5 excipients (realistic size)
///
/// With `--features parallel`, the two larger grids cross the default
/// dispatch threshold — compare against the sequential build to judge
/// whether Rayon pays for itself on this hardware.
fn benchmark_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("Volume Sweep");
    let calculator = ReconstitutionCalculator::new();
    let params = benchmark_parameters();
    let formulation = formulation_with_excipients(5);

    for points in [100usize, 10_000, 100_000].iter() {
        // Throughput lets criterion report points/second directly
        group.throughput(criterion::Throughput::Elements(*points as u64));

        group.bench_with_input(BenchmarkId::from_parameter(points), points, |b, &points| {
            let sweep = VolumeSweep::new(2.0, 20.0, points);

            b.iter(|| {
                calculator
                    .sweep(black_box(&formulation), black_box(&params), black_box(&sweep))
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_compute, benchmark_sweep);
criterion_main!(benches);
