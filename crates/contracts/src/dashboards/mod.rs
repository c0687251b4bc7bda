pub mod d400_overview;
pub mod d401_itc;
pub mod d402_sales;
pub mod d403_compliance;
