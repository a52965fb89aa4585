pub mod jet_std_ops;
pub mod num_traits_impls;
pub mod series_std_ops;
