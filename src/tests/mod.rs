use super::*;
extern crate std;
use alloc::collections::VecDeque;
use std::vec::Vec;

fn drain_stack<S: Stack<u32>>(stack: &mut S) -> Vec<u32> {
    let mut drained = Vec::new();
    while let Some(item) = stack.try_pop() {
        drained.push(item);
    }
    drained
}

fn drain_queue<Q: Queue<u32>>(queue: &mut Q) -> Vec<u32> {
    let mut drained = Vec::new();
    while !queue.is_empty() {
        drained.push(queue.dequeue());
    }
    drained
}

fn positions_of<C: Searchable<u32>>(container: &C, item: u32) -> (Option<usize>, Option<usize>) {
    (container.index_of(&item), container.last_index_of(&item))
}

#[test]
fn stacks_agree_across_storages() {
    let source = Array::new([1, 2, 3, 4]);

    let mut growable = ArrayList::new();
    Stack::push_all(&mut growable, &source);
    let mut bounded: heapless::Vec<u32, 8> = heapless::Vec::new();
    Stack::push_all(&mut bounded, &source);

    assert_eq!(drain_stack(&mut growable), [4, 3, 2, 1]);
    assert_eq!(drain_stack(&mut bounded), [4, 3, 2, 1]);
}

#[test]
fn queues_agree_across_storages() {
    let source: ArrayList<u32> = (10..15).collect();

    let mut unbounded = VecDeque::new();
    Queue::push_all(&mut unbounded, &source);
    let mut bounded: heapless::Deque<u32, 8> = heapless::Deque::new();
    Queue::push_all(&mut bounded, &source);

    assert_eq!(drain_queue(&mut unbounded), [10, 11, 12, 13, 14]);
    assert_eq!(drain_queue(&mut bounded), [10, 11, 12, 13, 14]);
}

#[test]
fn searches_agree_across_storages() {
    let values = [7, 3, 7, 5];
    let array = Array::new(values);
    let list: ArrayList<u32> = values.into_iter().collect();
    let deque: VecDeque<u32> = values.into_iter().collect();

    for item in [3, 5, 7, 9] {
        let expected = positions_of(&array, item);
        assert_eq!(positions_of(&list, item), expected);
        assert_eq!(positions_of(&deque, item), expected);
    }
    assert_eq!(positions_of(&array, 7), (Some(0), Some(2)));
    assert_eq!(positions_of(&array, 9), (None, None));
}

#[test]
fn list_errors_render() {
    let error = ListError::IndexOutOfBounds { index: 4, len: 2 };
    assert_eq!(std::format!("{error}"), "index 4 out of range for length 2");

    let error = ListError::RangeOutOfBounds {
        index: 1,
        count: 3,
        len: 2,
    };
    assert_eq!(
        std::format!("{error}"),
        "range of 3 elements at index 1 out of range for length 2"
    );
}
