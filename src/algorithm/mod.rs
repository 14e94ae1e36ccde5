/// Bridge placement between colinear mesas
pub mod connectivity;
/// One-ring wall dilation around floor
pub mod dilation;
/// Generation pipeline and retry policy
pub mod generator;
/// Recursive binary space partition
pub mod partition;
/// Density-driven random mesa placement
pub mod scatter;
/// Fixed demonstration layout
pub mod showcase;
