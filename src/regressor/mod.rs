pub mod knn;
pub mod ridge;
