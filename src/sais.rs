// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suffix array construction by induced sorting (SA-IS), O(n) time and space.
//!
//! Bytes are lifted to symbols `byte + 1` and terminated by a unique `0`, so
//! corpora containing NUL need no special path and every recursion level sees
//! the same shape of input: a string over `0..sigma` ending in a sentinel that
//! is strictly smaller than everything before it.
//!
//! ```text
//!  text    c  a  b  b  a  $
//!  type    L  S  L  L  L  S
//!  LMS        ▲           ▲
//!
//!  1. seed LMS suffixes at their bucket tails
//!  2. sweep left to right, inducing L suffixes into bucket heads
//!  3. sweep right to left, inducing S suffixes into bucket tails
//!  4. name the now-sorted LMS substrings; recurse if any name repeats
//!  5. seed the LMS suffixes in their true order and induce once more
//! ```
//!
//! Nong, Zhang & Chan, "Linear Suffix Array Construction by Almost Pure
//! Induced-Sorting", DCC 2009.

const EMPTY: usize = usize::MAX;

/// Positions of `text`'s suffixes in ascending byte order.
pub fn sais(text: &[u8]) -> Vec<usize> {
    if text.is_empty() {
        return Vec::new();
    }

    let symbols: Vec<u32> = text
        .iter()
        .map(|&b| u32::from(b) + 1)
        .chain(std::iter::once(0))
        .collect();

    let mut sa = induced_sort(&symbols, 257);
    // The sentinel suffix always sorts first
    sa.remove(0);
    sa
}

/// Per-symbol bucket extents in the suffix array.
struct Buckets {
    starts: Vec<usize>,
    ends: Vec<usize>,
}

impl Buckets {
    fn count(s: &[u32], sigma: usize) -> Self {
        let mut sizes = vec![0usize; sigma];
        for &c in s {
            sizes[c as usize] += 1;
        }
        let mut starts = Vec::with_capacity(sigma);
        let mut ends = Vec::with_capacity(sigma);
        let mut total = 0;
        for size in sizes {
            starts.push(total);
            total += size;
            ends.push(total);
        }
        Self { starts, ends }
    }
}

/// `true` where the suffix at `i` is S-type (smaller than the suffix at `i + 1`).
fn classify(s: &[u32]) -> Vec<bool> {
    let n = s.len();
    let mut small = vec![true; n];
    for i in (0..n - 1).rev() {
        small[i] = s[i] < s[i + 1] || (s[i] == s[i + 1] && small[i + 1]);
    }
    small
}

#[inline]
fn is_lms(small: &[bool], i: usize) -> bool {
    i > 0 && i != EMPTY && small[i] && !small[i - 1]
}

/// Seed `lms` (already in the desired order) and induce every other suffix.
fn induce(s: &[u32], small: &[bool], buckets: &Buckets, lms: &[usize], sa: &mut [usize]) {
    sa.fill(EMPTY);

    let mut tails = buckets.ends.clone();
    for &pos in lms.iter().rev() {
        let c = s[pos] as usize;
        tails[c] -= 1;
        sa[tails[c]] = pos;
    }

    let mut heads = buckets.starts.clone();
    for i in 0..sa.len() {
        let j = sa[i];
        if j == EMPTY || j == 0 || small[j - 1] {
            continue;
        }
        let c = s[j - 1] as usize;
        sa[heads[c]] = j - 1;
        heads[c] += 1;
    }

    let mut tails = buckets.ends.clone();
    for i in (0..sa.len()).rev() {
        let j = sa[i];
        if j == EMPTY || j == 0 || !small[j - 1] {
            continue;
        }
        let c = s[j - 1] as usize;
        tails[c] -= 1;
        sa[tails[c]] = j - 1;
    }
}

/// Whether the LMS substrings starting at `a` and `b` are identical.
///
/// The sentinel is unique, so neither walk can run past the end.
fn same_lms_substring(s: &[u32], small: &[bool], a: usize, b: usize) -> bool {
    let mut k = 0;
    loop {
        let (x, y) = (a + k, b + k);
        if s[x] != s[y] || small[x] != small[y] {
            return false;
        }
        if k > 0 {
            let (end_x, end_y) = (is_lms(small, x), is_lms(small, y));
            if end_x || end_y {
                return end_x && end_y;
            }
        }
        k += 1;
    }
}

/// SA-IS over symbols `0..sigma`, where `s` ends in a unique minimal sentinel.
fn induced_sort(s: &[u32], sigma: usize) -> Vec<usize> {
    let n = s.len();
    if n == 1 {
        return vec![0];
    }

    let small = classify(s);
    let buckets = Buckets::count(s, sigma);
    let lms: Vec<usize> = (1..n).filter(|&i| is_lms(&small, i)).collect();

    let mut sa = vec![EMPTY; n];
    induce(s, &small, &buckets, &lms, &mut sa);

    // LMS substrings now appear in sorted order; equal neighbours share a name
    let mut names = vec![0u32; n];
    let mut name = 0u32;
    let mut previous: Option<usize> = None;
    for &pos in sa.iter().filter(|&&pos| is_lms(&small, pos)) {
        if let Some(prev) = previous {
            if !same_lms_substring(s, &small, prev, pos) {
                name += 1;
            }
        }
        names[pos] = name;
        previous = Some(pos);
    }

    let reduced: Vec<u32> = lms.iter().map(|&pos| names[pos]).collect();
    let distinct = name as usize + 1;

    let order = if distinct < lms.len() {
        induced_sort(&reduced, distinct)
    } else {
        let mut order = vec![0usize; lms.len()];
        for (i, &rank) in reduced.iter().enumerate() {
            order[rank as usize] = i;
        }
        order
    };

    let sorted_lms: Vec<usize> = order.into_iter().map(|i| lms[i]).collect();
    induce(s, &small, &buckets, &sorted_lms, &mut sa);
    sa
}
