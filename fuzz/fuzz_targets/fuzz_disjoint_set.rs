//! Fuzz target for disjoint set operations.
//!
//! Replays random union/find/differ sequences against a naive labelling
//! and checks that both agree on set membership after every step.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use spanforest::{DisjointSet, NodeId};

/// Operations that can be performed on the disjoint set.
#[derive(Debug, Arbitrary)]
enum SetOp {
    /// Merge two sets.
    Union { x: u8, y: u8 },
    /// Look up a representative.
    Find { x: u8 },
    /// Compare membership.
    Differ { x: u8, y: u8 },
}

/// Fuzz input: set size and operation sequence.
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    /// Number of elements.
    size: u8,
    /// Operations to perform.
    ops: Vec<SetOp>,
}

fuzz_target!(|input: FuzzInput| {
    // Limit operations
    if input.ops.len() > 500 {
        return;
    }

    let n = input.size as usize;
    let mut sets = DisjointSet::new(n).unwrap();

    // Naive model: label[i] = set label, relabel on merge
    let mut label: Vec<usize> = (0..n).collect();
    let mut count = n;

    for op in &input.ops {
        match *op {
            SetOp::Union { x, y } => {
                let merged = sets.union(NodeId(x as u32), NodeId(y as u32));
                if (x as usize) >= n || (y as usize) >= n {
                    assert!(merged.is_err(), "union accepted out-of-range ({}, {})", x, y);
                    continue;
                }
                let (lx, ly) = (label[x as usize], label[y as usize]);
                assert_eq!(merged.unwrap(), lx != ly);
                if lx != ly {
                    for l in label.iter_mut() {
                        if *l == ly {
                            *l = lx;
                        }
                    }
                    count -= 1;
                }
            }
            SetOp::Find { x } => {
                let root = sets.find(NodeId(x as u32));
                if (x as usize) >= n {
                    assert!(root.is_err());
                    continue;
                }
                let root = root.unwrap();
                assert_eq!(label[root.index()], label[x as usize]);
                assert_eq!(sets.find(root).unwrap(), root);
            }
            SetOp::Differ { x, y } => {
                let differ = sets.differ(NodeId(x as u32), NodeId(y as u32));
                if (x as usize) >= n || (y as usize) >= n {
                    assert!(differ.is_err());
                    continue;
                }
                assert_eq!(differ.unwrap(), label[x as usize] != label[y as usize]);
            }
        }

        assert_eq!(sets.set_count(), count);
    }
});
