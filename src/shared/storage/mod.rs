mod fault;

pub use fault::StorageFault;
