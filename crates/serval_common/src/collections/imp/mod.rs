mod raw_array;

pub(crate) use raw_array::RawArray;
