use std::sync::Arc;

/// Score contribution that depends on whether the moving piece is a king.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PieceWeight {
    pub man: i32,
    pub king: i32,
}

impl PieceWeight {
    #[inline]
    #[must_use]
    pub const fn pick(self, is_king: bool) -> i32 {
        if is_king {
            self.king
        } else {
            self.man
        }
    }
}

/// Heuristic weights used by the move evaluator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreWeights {
    pub slide: PieceWeight,
    pub jump: PieceWeight,
    pub promotion: PieceWeight,
    pub game_over: i32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights {
            slide: PieceWeight { man: 2, king: 1 },
            jump: PieceWeight { man: 10, king: 20 },
            promotion: PieceWeight { man: 50, king: 60 },
            game_over: 1000,
        }
    }
}

/// How far down a node's continuation the sort key looks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lookahead {
    /// Own score plus the direct child's own score.
    #[default]
    Immediate,
    /// Own score plus the child's key, recursively: the whole best line.
    ///
    /// This changes move choice relative to `Immediate`.
    Subtree,
}

/// Summary of a finished search, passed to the info callback.
#[derive(Debug, Clone)]
pub struct SearchInfo {
    pub depth: u32,
    pub expansions: u64,
    pub candidates: usize,
    pub time_ms: u64,
    /// Selected line in move notation, space separated.
    pub line: String,
}

/// Callback type for search info reporting
pub type SearchInfoCallback = Arc<dyn Fn(&SearchInfo) + Send + Sync>;

/// Configuration for a search.
#[derive(Clone)]
pub struct SearchConfig {
    /// Remaining depth budget at the root
    pub depth: u32,
    /// Worker threads for the root's siblings (1 = sequential)
    pub threads: usize,
    pub lookahead: Lookahead,
    pub weights: ScoreWeights,
    /// Optional callback invoked once the search completes
    pub info_callback: Option<SearchInfoCallback>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 3,
            threads: 1,
            lookahead: Lookahead::Immediate,
            weights: ScoreWeights::default(),
            info_callback: None,
        }
    }
}

impl std::fmt::Debug for SearchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchConfig")
            .field("depth", &self.depth)
            .field("threads", &self.threads)
            .field("lookahead", &self.lookahead)
            .field("weights", &self.weights)
            .field("info_callback", &self.info_callback.is_some())
            .finish()
    }
}

impl SearchConfig {
    /// Create config with the given depth budget
    #[must_use]
    pub fn with_depth(depth: u32) -> Self {
        SearchConfig {
            depth,
            ..Default::default()
        }
    }

    /// Set depth budget
    #[must_use]
    pub fn depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Set worker thread count
    #[must_use]
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    #[must_use]
    pub fn lookahead(mut self, lookahead: Lookahead) -> Self {
        self.lookahead = lookahead;
        self
    }

    #[must_use]
    pub fn weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Set info callback
    #[must_use]
    pub fn with_info_callback(mut self, callback: SearchInfoCallback) -> Self {
        self.info_callback = Some(callback);
        self
    }
}
