//! Property tests for the reducers and the projection

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use proptest::prelude::*;
use statecraft_core::reducer::Reducer;
use statecraft_testing::SequentialIdGenerator;
use std::sync::Arc;
use todos::projection::{project, visible};
use todos::{
    FilterAction, FilterMode, FilterReducer, TodoAction, TodoEnvironment, TodoId, TodoItem,
    TodoList, TodoReducer,
};
use uuid::Uuid;

// ============================================================================
// Strategies
// ============================================================================

/// Lists use ids 1..=len; ids up to 16 are drawn so some miss
const MAX_LEN: usize = 12;

fn id(n: u128) -> TodoId {
    TodoId::from_uuid(Uuid::from_u128(n))
}

fn list_strategy() -> impl Strategy<Value = TodoList> {
    prop::collection::vec(any::<bool>(), 0..=MAX_LEN).prop_map(|flags| {
        flags
            .into_iter()
            .zip(1_u128..)
            .map(|(complete, n)| TodoItem::new(id(n), format!("task {n}")).with_complete(complete))
            .collect()
    })
}

fn id_strategy() -> impl Strategy<Value = TodoId> {
    (1_u128..=16).prop_map(id)
}

fn mode_strategy() -> impl Strategy<Value = FilterMode> {
    prop::sample::select(FilterMode::MODES.to_vec())
}

fn env() -> TodoEnvironment {
    TodoEnvironment::new(Arc::new(SequentialIdGenerator::starting_after(1_000)))
}

// ============================================================================
// Todo reducer
// ============================================================================

proptest! {
    #[test]
    fn do_todo_completes_only_the_target(todos in list_strategy(), target in id_strategy()) {
        let next = TodoReducer.reduce(&todos, TodoAction::DoTodo { id: target }, &env());

        prop_assert_eq!(next.len(), todos.len());
        for (before, after) in todos.iter().zip(next.iter()) {
            prop_assert_eq!(before.id, after.id);
            prop_assert_eq!(&before.task, &after.task);
            if before.id == target {
                prop_assert!(after.complete);
            } else {
                prop_assert_eq!(before.complete, after.complete);
            }
        }
    }

    #[test]
    fn undo_todo_reopens_only_the_target(todos in list_strategy(), target in id_strategy()) {
        let next = TodoReducer.reduce(&todos, TodoAction::UndoTodo { id: target }, &env());

        prop_assert_eq!(next.len(), todos.len());
        for (before, after) in todos.iter().zip(next.iter()) {
            if before.id == target {
                prop_assert!(!after.complete);
            } else {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn absent_id_is_a_noop(todos in list_strategy(), undo in any::<bool>()) {
        let missing = id(10_000);
        let action = if undo {
            TodoAction::UndoTodo { id: missing }
        } else {
            TodoAction::DoTodo { id: missing }
        };

        prop_assert_eq!(TodoReducer.reduce(&todos, action, &env()), todos);
    }

    #[test]
    fn add_todo_appends_one_fresh_open_item(todos in list_strategy(), task in ".{0,24}") {
        let next = TodoReducer.reduce(&todos, TodoAction::AddTodo { task: task.clone() }, &env());

        prop_assert_eq!(next.len(), todos.len() + 1);
        prop_assert_eq!(&next.as_slice()[..todos.len()], todos.as_slice());

        let added = next.as_slice().last().unwrap();
        prop_assert_eq!(&added.task, &task);
        prop_assert!(!added.complete);
        prop_assert!(!todos.contains(&added.id));
    }

    #[test]
    fn do_todo_is_idempotent(todos in list_strategy(), target in id_strategy()) {
        let env = env();
        let once = TodoReducer.reduce(&todos, TodoAction::DoTodo { id: target }, &env);
        let twice = TodoReducer.reduce(&once, TodoAction::DoTodo { id: target }, &env);

        prop_assert_eq!(once, twice);
    }
}

// ============================================================================
// Filter reducer
// ============================================================================

proptest! {
    #[test]
    fn next_mode_depends_only_on_action(from in mode_strategy(), other in mode_strategy(), to in mode_strategy()) {
        let action = FilterAction::from(to);

        let a = FilterReducer.reduce(&from, action, &());
        let b = FilterReducer.reduce(&other, action, &());

        prop_assert_eq!(a, to);
        prop_assert_eq!(a, b);
    }
}

// ============================================================================
// Projection
// ============================================================================

proptest! {
    #[test]
    fn complete_and_incomplete_partition_the_list(todos in list_strategy()) {
        let complete = visible(&todos, FilterMode::Complete);
        let incomplete = visible(&todos, FilterMode::Incomplete);

        prop_assert_eq!(complete.len() + incomplete.len(), todos.len());
        prop_assert!(complete.iter().all(|todo| todo.complete));
        prop_assert!(incomplete.iter().all(|todo| !todo.complete));

        // Merging both halves back in list order rebuilds the list
        let mut complete = complete.into_iter();
        let mut incomplete = incomplete.into_iter();
        let rebuilt: Vec<TodoItem> = todos
            .iter()
            .map(|todo| {
                let half = if todo.complete { &mut complete } else { &mut incomplete };
                half.next().unwrap()
            })
            .collect();
        prop_assert_eq!(rebuilt.as_slice(), todos.as_slice());
    }

    #[test]
    fn all_shows_everything(todos in list_strategy()) {
        prop_assert!(project(&todos, FilterMode::All).eq(todos.iter()));
    }
}
