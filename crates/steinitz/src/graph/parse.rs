//! Edge-list text parsing.
//!
//! Accepted shapes:
//! - bracketed literals: `[[0,1],[0,2]]`, `[(0, 1), (0, 2)]`, `(0, 1), (0, 2)`;
//!   brackets must balance and every innermost group holds exactly two integers;
//! - one pair per line: `0 1` or `0, 1`.
//!
//! `#` starts a comment that runs to the end of the line.

use super::types::GraphError;

/// Parse an edge list into labeled pairs (labels may be any integers).
pub fn parse_edge_list(text: &str) -> Result<Vec<(i64, i64)>, GraphError> {
    let body: Vec<&str> = text
        .lines()
        .map(|line| line.split('#').next().unwrap_or("").trim())
        .filter(|line| !line.is_empty())
        .collect();
    if body.is_empty() {
        return Err(GraphError::parse("no edges found"));
    }
    let bracketed = body.iter().any(|line| line.contains(|c: char| c == '[' || c == '('));
    let edges = if bracketed {
        bracketed_pairs(&body.join(" "))?
    } else {
        let mut out = Vec::with_capacity(body.len());
        for (i, line) in body.iter().enumerate() {
            let nums = integers(line, &[','])?;
            if nums.len() != 2 {
                return Err(GraphError::parse(format!(
                    "line {}: expected two vertices, found {}",
                    i + 1,
                    nums.len()
                )));
            }
            out.push((nums[0], nums[1]));
        }
        out
    };
    if edges.is_empty() {
        return Err(GraphError::parse("no edges found"));
    }
    Ok(edges)
}

fn integers(text: &str, separators: &[char]) -> Result<Vec<i64>, GraphError> {
    text.split(|c: char| c.is_whitespace() || separators.contains(&c))
        .filter(|tok| !tok.is_empty())
        .map(|tok| {
            tok.parse::<i64>()
                .map_err(|_| GraphError::parse(format!("not an integer: {tok:?}")))
        })
        .collect()
}

/// One open bracket: its integers (pair groups) or its child count (lists).
struct Group {
    open: char,
    nums: Vec<i64>,
    children: usize,
}

fn closing(open: char) -> char {
    if open == '[' {
        ']'
    } else {
        ')'
    }
}

fn bracketed_pairs(text: &str) -> Result<Vec<(i64, i64)>, GraphError> {
    let mut stack: Vec<Group> = Vec::new();
    let mut edges = Vec::new();
    let mut token = String::new();
    for c in text.chars().chain(std::iter::once(' ')) {
        if !(c.is_whitespace() || matches!(c, ',' | '[' | ']' | '(' | ')')) {
            token.push(c);
            continue;
        }
        if !token.is_empty() {
            let n = token
                .parse::<i64>()
                .map_err(|_| GraphError::parse(format!("not an integer: {token:?}")))?;
            token.clear();
            match stack.last_mut() {
                Some(top) if top.children == 0 => top.nums.push(n),
                Some(_) => {
                    return Err(GraphError::parse(format!("{n} sits beside a bracket group")))
                }
                None => return Err(GraphError::parse(format!("{n} outside brackets"))),
            }
        }
        match c {
            '[' | '(' => {
                if let Some(top) = stack.last() {
                    if !top.nums.is_empty() {
                        return Err(GraphError::parse("bracket group beside integers"));
                    }
                }
                if stack.len() == 2 {
                    return Err(GraphError::parse("brackets nested more than two deep"));
                }
                stack.push(Group {
                    open: c,
                    nums: Vec::new(),
                    children: 0,
                });
            }
            ']' | ')' => {
                let group = stack
                    .pop()
                    .ok_or_else(|| GraphError::parse(format!("unmatched {c:?}")))?;
                if closing(group.open) != c {
                    return Err(GraphError::parse(format!(
                        "{:?} closed by {c:?}",
                        group.open
                    )));
                }
                if group.children == 0 {
                    if group.nums.len() != 2 {
                        return Err(GraphError::parse(format!(
                            "edge needs two vertices, found {}",
                            group.nums.len()
                        )));
                    }
                    edges.push((group.nums[0], group.nums[1]));
                }
                if let Some(parent) = stack.last_mut() {
                    parent.children += 1;
                }
            }
            _ => {}
        }
    }
    if let Some(open) = stack.last() {
        return Err(GraphError::parse(format!("unclosed {:?}", open.open)));
    }
    Ok(edges)
}
