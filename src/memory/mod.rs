pub mod storage;

pub use storage::StorageArray;

pub trait Addressable {
    fn read(&self, index: usize) -> u8;
    fn write(&mut self, index: usize, value: u8);
}
