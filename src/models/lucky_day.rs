use serde::Serialize;

/// Lucky-day annotations from the traditional almanac tables.
/// A single date may carry several of these at once.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum LuckyDay {
    /// 一粒万倍日
    IchiryuManbai,
    /// 天赦日
    Tensha,
    /// 大安
    Taian,
    /// 寅の日
    Tori,
    /// 巳の日
    Mi,
    /// 己巳の日
    MiMi,
    /// 辰の日
    Tatsu,
    /// 甲子の日
    Koshi,
    /// 不成就日 (the one inauspicious tag)
    Fushojuju,
}

impl LuckyDay {
    pub const ALL: [LuckyDay; 9] = [
        LuckyDay::IchiryuManbai,
        LuckyDay::Tensha,
        LuckyDay::Taian,
        LuckyDay::Tori,
        LuckyDay::Mi,
        LuckyDay::MiMi,
        LuckyDay::Tatsu,
        LuckyDay::Koshi,
        LuckyDay::Fushojuju,
    ];

    pub fn ld_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ichiryu-manbai" => Some(Self::IchiryuManbai),
            "tensha" => Some(Self::Tensha),
            "taian" => Some(Self::Taian),
            "tori" => Some(Self::Tori),
            "mi" => Some(Self::Mi),
            "mi-mi" => Some(Self::MiMi),
            "tatsu" => Some(Self::Tatsu),
            "koshi" => Some(Self::Koshi),
            "fushojuju" => Some(Self::Fushojuju),
            _ => None,
        }
    }

    pub fn ld_as_str(&self) -> &'static str {
        match self {
            LuckyDay::IchiryuManbai => "ichiryu-manbai",
            LuckyDay::Tensha => "tensha",
            LuckyDay::Taian => "taian",
            LuckyDay::Tori => "tori",
            LuckyDay::Mi => "mi",
            LuckyDay::MiMi => "mi-mi",
            LuckyDay::Tatsu => "tatsu",
            LuckyDay::Koshi => "koshi",
            LuckyDay::Fushojuju => "fushojuju",
        }
    }

    /// Japanese display name used in the grid and legend.
    pub fn name_ja(&self) -> &'static str {
        match self {
            LuckyDay::IchiryuManbai => "一粒万倍日",
            LuckyDay::Tensha => "天赦日",
            LuckyDay::Taian => "大安",
            LuckyDay::Tori => "寅の日",
            LuckyDay::Mi => "巳の日",
            LuckyDay::MiMi => "己巳の日",
            LuckyDay::Tatsu => "辰の日",
            LuckyDay::Koshi => "甲子の日",
            LuckyDay::Fushojuju => "不成就日",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            LuckyDay::IchiryuManbai => {
                "わずかなものが万倍にも増えるとされる吉日。新しい事業の開始、投資、貯金の開始に最適。"
            }
            LuckyDay::Tensha => "天が万物の罪を赦す日とされ、暦の上で最高の吉日。すべての事柄に吉。",
            LuckyDay::Taian => "六曜の中で最も吉とされる日。結婚式、入籍、契約など、すべての事柄に吉。",
            LuckyDay::Tori => "十二支の寅の日。金運が高まるとされ、財布の新調や金銭に関する事柄に吉。",
            LuckyDay::Mi => "十二支の巳の日。弁財天と縁がある日とされ、商売繁盛、金運向上に吉。",
            LuckyDay::MiMi => "巳の日の中でも特に吉とされる日。金運が最高潮に達するとされる。",
            LuckyDay::Tatsu => "十二支の辰の日。新しい事業や計画の開始に吉。",
            LuckyDay::Koshi => "十干十二支の組み合わせで最初の日。新しい始まりに最適な吉日。",
            LuckyDay::Fushojuju => {
                "何事も成就しないとされる凶日。重要な決定や新しい事業の開始は避けるべき。"
            }
        }
    }

    pub fn is_inauspicious(&self) -> bool {
        matches!(self, LuckyDay::Fushojuju)
    }
}
