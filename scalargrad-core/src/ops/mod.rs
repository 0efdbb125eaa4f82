// Operations producing new graph nodes live here, grouped by family.
pub mod arithmetic;
