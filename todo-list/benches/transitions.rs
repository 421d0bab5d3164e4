//! Todo list transition benchmarks
//!
//! Every transition is O(n) in the number of todos; these measure the
//! per-command cost at a few list sizes, in isolation and through the Store.
//!
//! Run with: `cargo bench -p todo-list`

#![allow(missing_docs)] // Benchmarks don't need extensive docs
#![allow(clippy::expect_used, clippy::unwrap_used)] // Benchmarks can use expect for setup

use composable_todo_core::{environment::SequentialIdGenerator, reducer::Reducer};
use composable_todo_runtime::StoreConfig;
use composable_todo_testing::test_clock;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use std::sync::Arc;
use todo_list::{
    Bindings, TodoAction, TodoEnvironment, TodoId, TodoListState, TodoReducer, TodoText,
    app_store,
};

const SIZES: [usize; 3] = [10, 100, 1_000];

fn bench_env() -> TodoEnvironment {
    TodoEnvironment::new(Arc::new(test_clock()), Arc::new(SequentialIdGenerator::new()))
}

/// A list of `size` todos, every other one completed
fn populated(size: usize, env: &TodoEnvironment) -> TodoListState {
    let mut state = TodoListState::new();
    for i in 0..size {
        let text = TodoText::parse(format!("todo {i}")).expect("non-empty text");
        state = TodoReducer.reduce(&state, TodoAction::AddTodo { text }, env);
    }
    for todo in state.todos().to_vec().iter().step_by(2) {
        state = TodoReducer.reduce(&state, TodoAction::ToggleComplete { id: todo.id }, env);
    }
    state
}

/// Benchmark reducer execution in isolation (no Store overhead)
fn benchmark_reducer_execution(c: &mut Criterion) {
    let mut group = c.benchmark_group("todo_reducer");
    group.throughput(Throughput::Elements(1));

    let env = bench_env();

    for size in SIZES {
        let state = populated(size, &env);
        let middle = state.todos()[size / 2].id;
        let text = TodoText::parse("new").expect("non-empty text");

        group.bench_with_input(BenchmarkId::new("add_todo", size), &state, |b, state| {
            b.iter(|| {
                TodoReducer.reduce(
                    state,
                    black_box(TodoAction::AddTodo { text: text.clone() }),
                    &env,
                )
            });
        });

        group.bench_with_input(BenchmarkId::new("toggle_complete", size), &state, |b, state| {
            b.iter(|| {
                TodoReducer.reduce(state, black_box(TodoAction::ToggleComplete { id: middle }), &env)
            });
        });

        group.bench_with_input(BenchmarkId::new("complete_all", size), &state, |b, state| {
            b.iter(|| TodoReducer.reduce(state, black_box(TodoAction::CompleteAll), &env));
        });

        group.bench_with_input(BenchmarkId::new("remove_completed", size), &state, |b, state| {
            b.iter(|| TodoReducer.reduce(state, black_box(TodoAction::RemoveCompleted), &env));
        });
    }

    group.finish();
}

/// Benchmark a toggle round trip through the Store
fn benchmark_store_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_throughput");
    group.throughput(Throughput::Elements(1));

    group.bench_function("toggle_via_bindings", |b| {
        let store = app_store(bench_env(), StoreConfig::default());
        let bindings = Bindings::new(&store);
        for i in 0..100 {
            bindings.add_todo(&format!("todo {i}")).expect("non-empty text");
        }

        b.iter(|| bindings.toggle_complete(black_box(TodoId::new(50))));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_reducer_execution,
    benchmark_store_throughput
);
criterion_main!(benches);
