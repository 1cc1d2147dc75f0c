pub mod linked_list;
pub mod min_heap;
pub mod priority_queue;

pub use linked_list::LinkedList;
pub use min_heap::{HeapEntry, MinHeap};
pub use priority_queue::PriorityQueue;
