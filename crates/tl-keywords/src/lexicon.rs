//! Phrase lists consulted during candidate generation.
//!
//! Two lists drive extraction:
//! - [`StopPhrases`]: semantically empty words never reported as keywords, and bigrams that
//!   disqualify a window when they sit at its start or end
//! - [`DomainWords`]: common classroom vocabulary that makes a five-character window eligible

use std::collections::HashSet;

use stop_words::LANGUAGE;

/// Built-in stop phrases: pronouns, degree adverbs, connectives, particles, negations, time
/// words, generic filler and single-character function words.
static BUILTIN_STOP_PHRASES: &[&str] = &[
    // Pronouns and demonstratives
    "这个", "那个", "这些", "那些", "这样", "那样", "什么", "怎么", "如何", "为什么",
    // Degree adverbs
    "非常", "比较", "很", "特别", "相当", "十分", "极其", "有点", "稍微", "一般", "基本", "大概",
    "大约", "差不多", "几乎", "完全", "全部", "所有",
    // Connectives
    "但是", "不过", "然而", "而且", "并且", "或者", "如果", "因为", "所以", "虽然", "尽管", "即使",
    "无论", "不管", "只要", "只有", "除了",
    // Particles and hedges
    "就是", "也是", "都是", "还是", "其实", "确实", "真的", "应该", "可能", "也许", "或许", "似乎",
    "好像", "仿佛", "感觉",
    // Negations
    "不是", "没有", "不会", "不能", "不行", "不可以", "不应该", "不太",
    // Time words
    "现在", "以前", "以后", "之前", "之后", "今天", "昨天", "明天", "上课", "下课",
    // Generic filler
    "老师", "教授", "可以", "能够", "需要", "必须", "一定", "很多", "一些", "一点", "几个", "有时",
    "偶尔", "经常", "总是", "一直",
    // Single characters
    "的", "了", "在", "是", "我", "你", "他", "她", "它", "们", "有", "和", "就", "不", "人", "都",
    "一", "个", "上", "也", "到", "说", "要", "去", "会", "着", "看", "好", "自己", "这", "那",
];

/// Built-in domain vocabulary.
static BUILTIN_DOMAIN_WORDS: &[&str] = &[
    "作业", "考试", "课程", "课堂", "教学", "讲课", "讲解", "内容", "知识", "学生", "班级", "学期",
    "成绩", "分数", "评分", "评价",
];

/// Phrases excluded from keyword candidates.
///
/// Uses a `HashSet` for O(1) lookup.
#[derive(Debug, Clone)]
pub struct StopPhrases {
    /// Every stop phrase.
    phrases: HashSet<String>,
}

impl Default for StopPhrases {
    fn default() -> Self {
        Self::new()
    }
}

impl StopPhrases {
    /// Creates the built-in stop list.
    pub fn new() -> Self {
        Self::from_words(BUILTIN_STOP_PHRASES.iter().copied())
    }

    /// Creates a stop list holding exactly `words`.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Adds phrases to the list.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.phrases.extend(words.into_iter().map(Into::into));
    }

    /// Adds the ISO Chinese stopword list from the `stop-words` crate.
    pub fn with_iso_chinese(mut self) -> Self {
        self.extend(stop_words::get(LANGUAGE::Chinese).iter().copied());
        self
    }

    /// Checks if `phrase` is a stop phrase.
    pub fn contains(&self, phrase: &str) -> bool {
        self.phrases.contains(phrase)
    }

    /// Returns the number of stop phrases.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Returns true if no stop phrases are configured.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

/// Vocabulary that qualifies a five-character window as a candidate.
#[derive(Debug, Clone)]
pub struct DomainWords {
    /// Every domain word.
    words: HashSet<String>,
    /// Length in characters of the longest word, bounding substring lookups.
    longest: usize,
}

impl Default for DomainWords {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainWords {
    /// Creates the built-in domain vocabulary.
    pub fn new() -> Self {
        Self::from_words(BUILTIN_DOMAIN_WORDS.iter().copied())
    }

    /// Creates a vocabulary holding exactly `words`.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocabulary = Self {
            words: HashSet::new(),
            longest: 0,
        };
        vocabulary.extend(words);
        vocabulary
    }

    /// Adds words to the vocabulary. Empty words are ignored.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for word in words {
            let word = word.into();
            let len = word.chars().count();
            if len == 0 {
                continue;
            }
            self.longest = self.longest.max(len);
            self.words.insert(word);
        }
    }

    /// Checks if `word` is in the vocabulary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Returns true if any contiguous run of `chars` is a domain word.
    pub fn occurs_in(&self, chars: &[char]) -> bool {
        let mut buf = String::new();
        for start in 0..chars.len() {
            let max_len = self.longest.min(chars.len() - start);
            for len in 1..=max_len {
                buf.clear();
                buf.extend(&chars[start..start + len]);
                if self.words.contains(&buf) {
                    return true;
                }
            }
        }
        false
    }

    /// Returns the number of domain words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
