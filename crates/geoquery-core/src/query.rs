// crates/geoquery-core/src/query.rs

/// Tokenized view of a raw location query.
///
/// Holds two projections of the same input: the flat token sequence (commas
/// treated as whitespace) and the comma-delimited components. Place names are
/// assumed to sit at the tail of the query, so all accessors count consumed
/// tokens from the right.
#[derive(Clone, Debug)]
pub struct QueryTokens {
    tokens: Vec<String>,
    components: Vec<Vec<String>>,
}

impl QueryTokens {
    /// Split `query` into tokens and components.
    ///
    /// Tokens: commas replaced by spaces, then split on whitespace, empty
    /// fragments dropped. Components: split on commas first, then each
    /// segment on whitespace; empty tokens and empty segments are dropped,
    /// so component lengths always sum to the token count.
    pub fn parse(query: &str) -> Self {
        let tokens = query
            .replace(',', " ")
            .split_whitespace()
            .map(str::to_owned)
            .collect();
        let components = query
            .split(',')
            .map(|segment| {
                segment
                    .split_whitespace()
                    .map(str::to_owned)
                    .collect::<Vec<_>>()
            })
            .filter(|component| !component.is_empty())
            .collect();
        Self { tokens, components }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens available for the next classification pass, given that the
    /// trailing `consumed` tokens are already assigned to a place.
    ///
    /// The window comes from the last component that still has unconsumed
    /// tokens. Once a component is fully consumed the walk continues into the
    /// previous one: commas are a soft hint about intended grouping, not a
    /// hard parse boundary.
    pub fn window(&self, consumed: usize) -> &[String] {
        let mut remaining = consumed;
        for component in self.components.iter().rev() {
            if remaining < component.len() {
                return &component[..component.len() - remaining];
            }
            remaining -= component.len();
        }
        &[]
    }

    /// The `count` tokens preceding the `consumed` trailing ones, joined with
    /// single spaces. This is the lookup key for a scanner's consumed span;
    /// it is taken from the flat token sequence, so it may cross a comma
    /// boundary.
    pub fn span(&self, consumed: usize, count: usize) -> String {
        let end = self.tokens.len() - consumed;
        self.tokens[end - count..end].join(" ")
    }

    /// Everything before the `consumed` trailing tokens, joined with single
    /// spaces. Always a prefix of the original token sequence.
    pub fn remaining(&self, consumed: usize) -> String {
        self.tokens[..self.tokens.len() - consumed].join(" ")
    }
}
