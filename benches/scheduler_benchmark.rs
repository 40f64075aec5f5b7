/*!
 * Scheduler Benchmarks
 *
 * Compare dispatch cost and full simulation runs across policies
 */

use cpu_sched_sim::{
    build_scheduler, Platform, ProcessSpec, SchedulerConfig, SchedulingPolicy, SimProcess,
    Simulation, SimulationConfig, Workload,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;

/// Discards narration so only scheduling work is measured
struct NullPlatform;

impl Platform for NullPlatform {
    fn log(&self, _message: &str) {}
}

fn synthetic_workload(processes: u32) -> Workload {
    Workload::new(
        (0..processes)
            .map(|i| {
                let i = u64::from(i);
                ProcessSpec::new(
                    format!("p{}", i),
                    i % 17,
                    vec![1 + i % 7, 1 + (i * 3) % 5, 2 + i % 4],
                )
            })
            .collect(),
    )
}

fn bench_admit_and_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("admit_and_drain");

    for policy in SchedulingPolicy::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(policy),
            &policy,
            |b, &policy| {
                let processes: Vec<Arc<SimProcess>> = (1..=256u32)
                    .map(|pid| {
                        Arc::new(
                            SimProcess::new(pid, format!("p{}", pid), 0, vec![u64::from(pid % 13) + 1])
                                .unwrap(),
                        )
                    })
                    .collect();

                b.iter(|| {
                    let mut scheduler =
                        build_scheduler(&SchedulerConfig::new(policy), Arc::new(NullPlatform));
                    for p in &processes {
                        scheduler.notify_new_process(p.clone());
                    }
                    while scheduler.ready_len() > 0 {
                        black_box(scheduler.update(None));
                    }
                    black_box(scheduler.context_switches())
                });
            },
        );
    }

    group.finish();
}

fn bench_full_simulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_simulation");
    let workload = synthetic_workload(200);

    for policy in SchedulingPolicy::ALL {
        let config = SimulationConfig::new(SchedulerConfig::new(policy));

        group.bench_with_input(BenchmarkId::from_parameter(policy), &config, |b, config| {
            b.iter(|| {
                let report = Simulation::new(*config, &workload, Arc::new(NullPlatform))
                    .unwrap()
                    .run()
                    .unwrap();
                black_box(report.total_ticks)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_admit_and_drain, bench_full_simulation);

criterion_main!(benches);
