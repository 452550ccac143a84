#[cfg(not(feature = "loom"))]
mod clear;
#[cfg(not(feature = "loom"))]
mod overwrite;
