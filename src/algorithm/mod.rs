/// Farthest-point distance along a closed loop
pub mod distance;
/// Full pipeline from sketch text to loop report
pub mod executor;
/// Start tile inference from neighbouring pipes
pub mod resolver;
/// Step-by-step loop walking state machine
pub mod tracer;
/// Bitset of grid cells visited during a walk
pub mod visited;
