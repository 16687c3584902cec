//! Internal tests for tinyembed-infrastructure
