//! This module reimports commonly used types.

pub use crate::algorithms::{AlgorithmKind, TourOptimizer, TourOutcome};

pub use crate::models::{
    Coordinate, DistanceMatrix, DistanceModel, OptimizationOptions, Priority, RouteMetrics, Sequence, Stop,
};

pub use crate::solver::{
    AlgorithmComparison, BulkOptimizationResult, OptimizationResult, RouteFailure, RouteRequest, RouteSuccess,
    compare_algorithms, optimize, optimize_many,
};

pub use crate::utils::{
    DefaultRandom, Environment, InfoLogger, OptimizationError, Quota, Random, RouteResult, TimeQuota,
    compare_floats,
};
