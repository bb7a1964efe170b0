use serde::Serialize;

/// The six-day rokuyo (六曜) cycle. Variant order IS the cycle order,
/// anchored so that the epoch date maps to Senkatsu (index 0).
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Rokuyo {
    /// 先勝
    Senkatsu,
    /// 友引
    Tomobiki,
    /// 先負
    Senbu,
    /// 仏滅
    Butsumetu,
    /// 大安
    Taian,
    /// 赤口
    Akakuchi,
}

impl Rokuyo {
    pub const CYCLE: [Rokuyo; 6] = [
        Rokuyo::Senkatsu,
        Rokuyo::Tomobiki,
        Rokuyo::Senbu,
        Rokuyo::Butsumetu,
        Rokuyo::Taian,
        Rokuyo::Akakuchi,
    ];

    /// Cycle position, 0..=5.
    pub fn index(&self) -> usize {
        match self {
            Rokuyo::Senkatsu => 0,
            Rokuyo::Tomobiki => 1,
            Rokuyo::Senbu => 2,
            Rokuyo::Butsumetu => 3,
            Rokuyo::Taian => 4,
            Rokuyo::Akakuchi => 5,
        }
    }

    pub fn from_index(i: usize) -> Self {
        Self::CYCLE[i % 6]
    }

    pub fn ry_as_str(&self) -> &'static str {
        match self {
            Rokuyo::Senkatsu => "senkatsu",
            Rokuyo::Tomobiki => "tomobiki",
            Rokuyo::Senbu => "senbu",
            Rokuyo::Butsumetu => "butsumetu",
            Rokuyo::Taian => "taian",
            Rokuyo::Akakuchi => "akakuchi",
        }
    }

    pub fn name_ja(&self) -> &'static str {
        match self {
            Rokuyo::Senkatsu => "先勝",
            Rokuyo::Tomobiki => "友引",
            Rokuyo::Senbu => "先負",
            Rokuyo::Butsumetu => "仏滅",
            Rokuyo::Taian => "大安",
            Rokuyo::Akakuchi => "赤口",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Rokuyo::Senkatsu => "先んずれば勝つ。午前は吉、午後は凶。",
            Rokuyo::Tomobiki => "友を引く日。友人との約束や結婚に吉。ただし葬式は避けるべき。",
            Rokuyo::Senbu => "先んずれば負ける。午後は吉、午前は凶。",
            Rokuyo::Butsumetu => "仏も滅する日とされ、六曜の中で最も凶。重要な事柄は避けるべき。",
            Rokuyo::Taian => "すべてに吉。最も縁起の良い日。",
            Rokuyo::Akakuchi => "赤い口。昼時は吉、朝夕は凶。訴訟に吉。",
        }
    }
}
