// Pipeline orchestration — the end-to-end comparison run.

pub mod compare;
