//! Text rendering of a tree, root first.
//!
//! ```text
//! └─ 197f278a69a7aad76a9fd4d7a4cfd57bba7bf6b6d8825593bb15ffed295552a4
//!    ├─ ec0b79751b4a12ce50fe71b6fa7b1583df0a1fa676827d0a7030a1170ca1c032
//!    │  ├─ 231e1a4d644b6760a8d51cae313e8a78c35e4783bfaf5225712734939387d148
//!    │  └─ 8de86150eaaafcb9367396f2bee0cfd657854c6c561b741f6f8ef4fb28e82e12
//!    └─ a52dcee46ccee7248bc5cc5f809c97401c0e28e427e4a040989be1019be48760
//!       ├─ 2746415648413ade4abc137894b0fa189d921433053a910c955568a6265c00e6
//!       └─ 2746415648413ade4abc137894b0fa189d921433053a910c955568a6265c00e6
//! ```

use std::fmt;

use super::MerkleTree;
use crate::hasher::HashFunction;

impl<H: HashFunction> fmt::Display for MerkleTree<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut prefix = String::new();
        write_node(f, self, self.depth(), 0, &mut prefix, true)
    }
}

fn write_node<H: HashFunction>(
    f: &mut fmt::Formatter<'_>,
    tree: &MerkleTree<H>,
    level: usize,
    index: usize,
    prefix: &mut String,
    last: bool,
) -> fmt::Result {
    let branch = if last { "└─ " } else { "├─ " };
    writeln!(f, "{prefix}{branch}{}", tree.levels[level][index])?;

    if level == 0 {
        return Ok(());
    }

    let indent = if last { "   " } else { "│  " };
    prefix.push_str(indent);

    // an odd tail is drawn twice, the way it was hashed
    let below = level - 1;
    let right = if 2 * index + 1 < tree.levels[below].len() {
        2 * index + 1
    } else {
        2 * index
    };
    write_node(f, tree, below, 2 * index, prefix, false)?;
    write_node(f, tree, below, right, prefix, true)?;

    prefix.truncate(prefix.len() - indent.len());
    Ok(())
}
