pub mod helper;

mod ring_buffer;
pub use ring_buffer::RingBuffer;
