/// Linear and binary search with step traces
///
/// Both searches record one `TraceStep` per inspected element so the
/// session can replay what happened. Binary search always works on a sorted
/// copy; the index it reports points into that copy, not the caller's list.

use std::fmt;

/// Search algorithm and its textbook complexity labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Linear,
    Binary,
}

impl Method {
    pub fn name(&self) -> &'static str {
        match self {
            Method::Linear => "Linear Search",
            Method::Binary => "Binary Search",
        }
    }

    pub fn time_complexity(&self) -> &'static str {
        match self {
            Method::Linear => "O(n)",
            Method::Binary => "O(log n)",
        }
    }

    /// Binary search is labelled O(1) even though it sorts a copy first
    pub fn space_complexity(&self) -> &'static str {
        match self {
            Method::Linear | Method::Binary => "O(1)",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One inspected element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceStep {
    Linear {
        step: usize,
        index: usize,
        value: i64,
        target: i64,
    },
    Binary {
        step: usize,
        low: usize,
        high: usize,
        mid: usize,
        value: i64,
        target: i64,
    },
}

impl fmt::Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceStep::Linear {
                step,
                index,
                value,
                target,
            } => write!(
                f,
                "Step {}: index={}, value={}, target={}",
                step, index, value, target
            ),
            TraceStep::Binary {
                step,
                low,
                high,
                mid,
                value,
                target,
            } => write!(
                f,
                "Step {}: low={}, high={}, mid={}, value={}, target={}",
                step, low, high, mid, value, target
            ),
        }
    }
}

/// Outcome of one algorithm run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub method: Method,
    pub target: i64,
    /// `None` when the target is absent
    pub index: Option<usize>,
    pub steps: usize,
    pub trace: Vec<TraceStep>,
    /// The sorted copy binary search ran on
    pub sorted: Option<Vec<i64>>,
}

impl SearchResult {
    pub fn found(&self) -> bool {
        self.index.is_some()
    }
}

/// Scan left to right, stopping at the first match
///
/// # Returns
/// * `SearchResult` with `steps == index + 1` on success, `arr.len()` otherwise
pub fn linear_search(arr: &[i64], target: i64) -> SearchResult {
    let mut trace = Vec::with_capacity(arr.len());
    let mut index = None;

    for (i, &value) in arr.iter().enumerate() {
        trace.push(TraceStep::Linear {
            step: i + 1,
            index: i,
            value,
            target,
        });

        if value == target {
            index = Some(i);
            break;
        }
    }

    SearchResult {
        method: Method::Linear,
        target,
        index,
        steps: trace.len(),
        trace,
        sorted: None,
    }
}

/// Classic halving search over a sorted copy of `arr`
///
/// `arr` is left untouched. With duplicates the returned index is whichever
/// one halving lands on first.
pub fn binary_search(arr: &[i64], target: i64) -> SearchResult {
    let mut sorted = arr.to_vec();
    sorted.sort_unstable();

    let mut trace = Vec::new();
    let mut index = None;

    if !sorted.is_empty() {
        // high can drop below zero, so track bounds as signed
        let mut low: isize = 0;
        let mut high: isize = sorted.len() as isize - 1;

        while low <= high {
            let mid = (low + high) / 2;
            let value = sorted[mid as usize];

            trace.push(TraceStep::Binary {
                step: trace.len() + 1,
                low: low as usize,
                high: high as usize,
                mid: mid as usize,
                value,
                target,
            });

            if value == target {
                index = Some(mid as usize);
                break;
            } else if value < target {
                low = mid + 1;
            } else {
                high = mid - 1;
            }
        }
    }

    SearchResult {
        method: Method::Binary,
        target,
        index,
        steps: trace.len(),
        trace,
        sorted: Some(sorted),
    }
}

/// Which method needed fewer steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Faster(Method),
    Tie,
}

/// Linear and binary search over the same list and target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub linear: SearchResult,
    pub binary: SearchResult,
}

impl Comparison {
    pub fn verdict(&self) -> Verdict {
        use std::cmp::Ordering;

        match self.linear.steps.cmp(&self.binary.steps) {
            Ordering::Less => Verdict::Faster(Method::Linear),
            Ordering::Greater => Verdict::Faster(Method::Binary),
            Ordering::Equal => Verdict::Tie,
        }
    }
}

/// Run linear then binary search with the same input
pub fn compare(arr: &[i64], target: i64) -> Comparison {
    Comparison {
        linear: linear_search(arr, target),
        binary: binary_search(arr, target),
    }
}
