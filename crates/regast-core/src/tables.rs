//! Alias tables for Unicode property values.
//!
//! Aliases follow `PropertyAliases.txt` and `PropertyValueAliases.txt` from the
//! UCD, written in normalized form (see [`crate::utils::normalize_property_name`]).
//! The first alias of each entry is the short name.

macro_rules! define_aliases {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $variant:ident => [$($alias:literal),+ $(,)?]
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $($variant),*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            /// Looks up an alias that has already been normalized.
            pub fn from_alias(s: &str) -> Option<Self> {
                match s {
                    $($($alias)|+ => Some(Self::$variant),)*
                    _ => None,
                }
            }

            pub fn short_name(self) -> &'static str {
                match self {
                    $(Self::$variant => define_aliases!(@first $($alias),+),)*
                }
            }
        }
    };
    (@first $first:literal $(, $rest:literal)*) => {
        $first
    };
}

define_aliases! {
    /// General category, including the grouped categories (`L`, `LC`, ...).
    pub enum GeneralCategory {
        Other => ["c", "other"],
        Control => ["cc", "control", "cntrl"],
        Format => ["cf", "format"],
        Unassigned => ["cn", "unassigned"],
        PrivateUse => ["co", "privateuse"],
        Surrogate => ["cs", "surrogate"],
        Letter => ["l", "letter"],
        // `l&` is the PCRE spelling of `LC`.
        CasedLetter => ["lc", "l&", "casedletter"],
        LowercaseLetter => ["ll", "lowercaseletter"],
        ModifierLetter => ["lm", "modifierletter"],
        OtherLetter => ["lo", "otherletter"],
        TitlecaseLetter => ["lt", "titlecaseletter"],
        UppercaseLetter => ["lu", "uppercaseletter"],
        Mark => ["m", "mark", "combiningmark"],
        SpacingMark => ["mc", "spacingmark"],
        EnclosingMark => ["me", "enclosingmark"],
        NonspacingMark => ["mn", "nonspacingmark"],
        Number => ["n", "number"],
        DecimalNumber => ["nd", "decimalnumber", "digit"],
        LetterNumber => ["nl", "letternumber"],
        OtherNumber => ["no", "othernumber"],
        Punctuation => ["p", "punctuation", "punct"],
        ConnectorPunctuation => ["pc", "connectorpunctuation"],
        DashPunctuation => ["pd", "dashpunctuation"],
        ClosePunctuation => ["pe", "closepunctuation"],
        FinalPunctuation => ["pf", "finalpunctuation"],
        InitialPunctuation => ["pi", "initialpunctuation"],
        OtherPunctuation => ["po", "otherpunctuation"],
        OpenPunctuation => ["ps", "openpunctuation"],
        Symbol => ["s", "symbol"],
        CurrencySymbol => ["sc", "currencysymbol"],
        ModifierSymbol => ["sk", "modifiersymbol"],
        MathSymbol => ["sm", "mathsymbol"],
        OtherSymbol => ["so", "othersymbol"],
        Separator => ["z", "separator"],
        LineSeparator => ["zl", "lineseparator"],
        ParagraphSeparator => ["zp", "paragraphseparator"],
        SpaceSeparator => ["zs", "spaceseparator"],
    }
}

define_aliases! {
    /// Binary (boolean) Unicode properties.
    pub enum BinaryProperty {
        AsciiHexDigit => ["ahex", "asciihexdigit"],
        Alphabetic => ["alpha", "alphabetic"],
        BidiControl => ["bidic", "bidicontrol"],
        BidiMirrored => ["bidim", "bidimirrored"],
        Cased => ["cased"],
        CompositionExclusion => ["ce", "compositionexclusion"],
        CaseIgnorable => ["ci", "caseignorable"],
        FullCompositionExclusion => ["compex", "fullcompositionexclusion"],
        ChangesWhenCasefolded => ["cwcf", "changeswhencasefolded"],
        ChangesWhenCasemapped => ["cwcm", "changeswhencasemapped"],
        ChangesWhenNfkcCasefolded => ["cwkcf", "changeswhennfkccasefolded"],
        ChangesWhenLowercased => ["cwl", "changeswhenlowercased"],
        ChangesWhenTitlecased => ["cwt", "changeswhentitlecased"],
        ChangesWhenUppercased => ["cwu", "changeswhenuppercased"],
        Dash => ["dash"],
        Deprecated => ["dep", "deprecated"],
        DefaultIgnorableCodePoint => ["di", "defaultignorablecodepoint"],
        Diacritic => ["dia", "diacritic"],
        EmojiModifierBase => ["ebase", "emojimodifierbase"],
        EmojiComponent => ["ecomp", "emojicomponent"],
        EmojiModifier => ["emod", "emojimodifier"],
        Emoji => ["emoji"],
        EmojiPresentation => ["epres", "emojipresentation"],
        Extender => ["ext", "extender"],
        ExtendedPictographic => ["extpict", "extendedpictographic"],
        GraphemeBase => ["grbase", "graphemebase"],
        GraphemeExtend => ["grext", "graphemeextend"],
        GraphemeLink => ["grlink", "graphemelink"],
        HexDigit => ["hex", "hexdigit"],
        Hyphen => ["hyphen"],
        IdContinue => ["idc", "idcontinue"],
        Ideographic => ["ideo", "ideographic"],
        IdStart => ["ids", "idstart"],
        IdsBinaryOperator => ["idsb", "idsbinaryoperator"],
        IdsTrinaryOperator => ["idst", "idstrinaryoperator"],
        JoinControl => ["joinc", "joincontrol"],
        LogicalOrderException => ["loe", "logicalorderexception"],
        Lowercase => ["lower", "lowercase"],
        Math => ["math"],
        NoncharacterCodePoint => ["nchar", "noncharactercodepoint"],
        OtherAlphabetic => ["oalpha", "otheralphabetic"],
        OtherDefaultIgnorableCodePoint => ["odi", "otherdefaultignorablecodepoint"],
        OtherGraphemeExtend => ["ogrext", "othergraphemeextend"],
        OtherIdContinue => ["oidc", "otheridcontinue"],
        OtherIdStart => ["oids", "otheridstart"],
        OtherLowercase => ["olower", "otherlowercase"],
        OtherMath => ["omath", "othermath"],
        OtherUppercase => ["oupper", "otheruppercase"],
        PatternSyntax => ["patsyn", "patternsyntax"],
        PatternWhitespace => ["patws", "patternwhitespace"],
        PrependedConcatenationMark => ["pcm", "prependedconcatenationmark"],
        QuotationMark => ["qmark", "quotationmark"],
        Radical => ["radical"],
        RegionalIndicator => ["ri", "regionalindicator"],
        SoftDotted => ["sd", "softdotted"],
        SentenceTerminal => ["sterm", "sentenceterminal"],
        TerminalPunctuation => ["term", "terminalpunctuation"],
        UnifiedIdeograph => ["uideo", "unifiedideograph"],
        Uppercase => ["upper", "uppercase"],
        VariationSelector => ["vs", "variationselector"],
        Whitespace => ["wspace", "whitespace", "space"],
        XidContinue => ["xidc", "xidcontinue"],
        XidStart => ["xids", "xidstart"],
        ExpandsOnNfc => ["xonfc", "expandsonnfc"],
        ExpandsOnNfd => ["xonfd", "expandsonnfd"],
        ExpandsOnNfkc => ["xonfkc", "expandsonnfkc"],
        ExpandsOnNfkd => ["xonfkd", "expandsonnfkd"],
    }
}

impl BinaryProperty {
    /// Properties removed from recent Unicode versions.
    pub fn is_deprecated(self) -> bool {
        matches!(
            self,
            Self::ExpandsOnNfc | Self::ExpandsOnNfd | Self::ExpandsOnNfkc | Self::ExpandsOnNfkd
        )
    }

    /// Properties the matching engine has no data for.
    pub fn is_unsupported(self) -> bool {
        matches!(
            self,
            Self::BidiControl
                | Self::CompositionExclusion
                | Self::EmojiComponent
                | Self::ExtendedPictographic
                | Self::GraphemeLink
                | Self::Hyphen
                | Self::OtherAlphabetic
                | Self::OtherDefaultIgnorableCodePoint
                | Self::OtherGraphemeExtend
                | Self::OtherIdContinue
                | Self::OtherIdStart
                | Self::OtherLowercase
                | Self::OtherMath
                | Self::OtherUppercase
                | Self::PrependedConcatenationMark
        )
    }
}

define_aliases! {
    /// Unicode scripts, keyed by ISO 15924 code and long name.
    pub enum Script {
        Adlam => ["adlm", "adlam"],
        CaucasianAlbanian => ["aghb", "caucasianalbanian"],
        Ahom => ["ahom"],
        Arabic => ["arab", "arabic"],
        ImperialAramaic => ["armi", "imperialaramaic"],
        Armenian => ["armn", "armenian"],
        Avestan => ["avst", "avestan"],
        Balinese => ["bali", "balinese"],
        Bamum => ["bamu", "bamum"],
        BassaVah => ["bass", "bassavah"],
        Batak => ["batk", "batak"],
        Bengali => ["beng", "bengali"],
        Bhaiksuki => ["bhks", "bhaiksuki"],
        Bopomofo => ["bopo", "bopomofo"],
        Brahmi => ["brah", "brahmi"],
        Braille => ["brai", "braille"],
        Buginese => ["bugi", "buginese"],
        Buhid => ["buhd", "buhid"],
        Chakma => ["cakm", "chakma"],
        CanadianAboriginal => ["cans", "canadianaboriginal"],
        Carian => ["cari", "carian"],
        Cham => ["cham"],
        Cherokee => ["cher", "cherokee"],
        Chorasmian => ["chrs", "chorasmian"],
        Coptic => ["copt", "coptic", "qaac"],
        CyproMinoan => ["cpmn", "cyprominoan"],
        Cypriot => ["cprt", "cypriot"],
        Cyrillic => ["cyrl", "cyrillic"],
        Devanagari => ["deva", "devanagari"],
        DivesAkuru => ["diak", "divesakuru"],
        Dogra => ["dogr", "dogra"],
        Deseret => ["dsrt", "deseret"],
        Duployan => ["dupl", "duployan"],
        EgyptianHieroglyphs => ["egyp", "egyptianhieroglyphs"],
        Elbasan => ["elba", "elbasan"],
        Elymaic => ["elym", "elymaic"],
        Ethiopic => ["ethi", "ethiopic"],
        Georgian => ["geor", "georgian"],
        Glagolitic => ["glag", "glagolitic"],
        GunjalaGondi => ["gong", "gunjalagondi"],
        MasaramGondi => ["gonm", "masaramgondi"],
        Gothic => ["goth", "gothic"],
        Grantha => ["gran", "grantha"],
        Greek => ["grek", "greek"],
        Gujarati => ["gujr", "gujarati"],
        Gurmukhi => ["guru", "gurmukhi"],
        Hangul => ["hang", "hangul"],
        Han => ["hani", "han"],
        Hanunoo => ["hano", "hanunoo"],
        Hatran => ["hatr", "hatran"],
        Hebrew => ["hebr", "hebrew"],
        Hiragana => ["hira", "hiragana"],
        AnatolianHieroglyphs => ["hluw", "anatolianhieroglyphs"],
        PahawhHmong => ["hmng", "pahawhhmong"],
        NyiakengPuachueHmong => ["hmnp", "nyiakengpuachuehmong"],
        KatakanaOrHiragana => ["hrkt", "katakanaorhiragana"],
        OldHungarian => ["hung", "oldhungarian"],
        OldItalic => ["ital", "olditalic"],
        Javanese => ["java", "javanese"],
        KayahLi => ["kali", "kayahli"],
        Katakana => ["kana", "katakana"],
        Kharoshthi => ["khar", "kharoshthi"],
        Khmer => ["khmr", "khmer"],
        Khojki => ["khoj", "khojki"],
        KhitanSmallScript => ["kits", "khitansmallscript"],
        Kannada => ["knda", "kannada"],
        Kaithi => ["kthi", "kaithi"],
        TaiTham => ["lana", "taitham"],
        Lao => ["laoo", "lao"],
        Latin => ["latn", "latin"],
        Lepcha => ["lepc", "lepcha"],
        Limbu => ["limb", "limbu"],
        LinearA => ["lina", "lineara"],
        LinearB => ["linb", "linearb"],
        Lisu => ["lisu"],
        Lycian => ["lyci", "lycian"],
        Lydian => ["lydi", "lydian"],
        Mahajani => ["mahj", "mahajani"],
        Makasar => ["maka", "makasar"],
        Mandaic => ["mand", "mandaic"],
        Manichaean => ["mani", "manichaean"],
        Marchen => ["marc", "marchen"],
        Medefaidrin => ["medf", "medefaidrin"],
        MendeKikakui => ["mend", "mendekikakui"],
        MeroiticCursive => ["merc", "meroiticcursive"],
        MeroiticHieroglyphs => ["mero", "meroitichieroglyphs"],
        Malayalam => ["mlym", "malayalam"],
        Modi => ["modi"],
        Mongolian => ["mong", "mongolian"],
        Mro => ["mroo", "mro"],
        MeeteiMayek => ["mtei", "meeteimayek"],
        Multani => ["mult", "multani"],
        Myanmar => ["mymr", "myanmar"],
        Nandinagari => ["nand", "nandinagari"],
        OldNorthArabian => ["narb", "oldnortharabian"],
        Nabataean => ["nbat", "nabataean"],
        Newa => ["newa"],
        Nko => ["nkoo", "nko"],
        Nushu => ["nshu", "nushu"],
        Ogham => ["ogam", "ogham"],
        OlChiki => ["olck", "olchiki"],
        OldTurkic => ["orkh", "oldturkic"],
        Oriya => ["orya", "oriya"],
        Osage => ["osge", "osage"],
        Osmanya => ["osma", "osmanya"],
        OldUyghur => ["ougr", "olduyghur"],
        Palmyrene => ["palm", "palmyrene"],
        PauCinHau => ["pauc", "paucinhau"],
        OldPermic => ["perm", "oldpermic"],
        PhagsPa => ["phag", "phagspa"],
        InscriptionalPahlavi => ["phli", "inscriptionalpahlavi"],
        PsalterPahlavi => ["phlp", "psalterpahlavi"],
        Phoenician => ["phnx", "phoenician"],
        Miao => ["plrd", "miao"],
        InscriptionalParthian => ["prti", "inscriptionalparthian"],
        Rejang => ["rjng", "rejang"],
        HanifiRohingya => ["rohg", "hanifirohingya"],
        Runic => ["runr", "runic"],
        Samaritan => ["samr", "samaritan"],
        OldSouthArabian => ["sarb", "oldsoutharabian"],
        Saurashtra => ["saur", "saurashtra"],
        SignWriting => ["sgnw", "signwriting"],
        Shavian => ["shaw", "shavian"],
        Sharada => ["shrd", "sharada"],
        Siddham => ["sidd", "siddham"],
        Khudawadi => ["sind", "khudawadi"],
        Sinhala => ["sinh", "sinhala"],
        Sogdian => ["sogd", "sogdian"],
        OldSogdian => ["sogo", "oldsogdian"],
        SoraSompeng => ["sora", "sorasompeng"],
        Soyombo => ["soyo", "soyombo"],
        Sundanese => ["sund", "sundanese"],
        SylotiNagri => ["sylo", "sylotinagri"],
        Syriac => ["syrc", "syriac"],
        Tagbanwa => ["tagb", "tagbanwa"],
        Takri => ["takr", "takri"],
        TaiLe => ["tale", "taile"],
        NewTaiLue => ["talu", "newtailue"],
        Tamil => ["taml", "tamil"],
        Tangut => ["tang", "tangut"],
        TaiViet => ["tavt", "taiviet"],
        Telugu => ["telu", "telugu"],
        Tifinagh => ["tfng", "tifinagh"],
        Tagalog => ["tglg", "tagalog"],
        Thaana => ["thaa", "thaana"],
        Thai => ["thai"],
        Tibetan => ["tibt", "tibetan"],
        Tirhuta => ["tirh", "tirhuta"],
        Tangsa => ["tnsa", "tangsa"],
        Toto => ["toto"],
        Ugaritic => ["ugar", "ugaritic"],
        Vai => ["vaii", "vai"],
        Vithkuqi => ["vith", "vithkuqi"],
        WarangCiti => ["wara", "warangciti"],
        Wancho => ["wcho", "wancho"],
        OldPersian => ["xpeo", "oldpersian"],
        Cuneiform => ["xsux", "cuneiform"],
        Yezidi => ["yezi", "yezidi"],
        Yi => ["yiii", "yi"],
        ZanabazarSquare => ["zanb", "zanabazarsquare"],
        Inherited => ["zinh", "inherited", "qaai"],
        Common => ["zyyy", "common"],
        Unknown => ["zzzz", "unknown"],
    }
}

define_aliases! {
    /// POSIX bracket-expression classes that have no general-category equivalent.
    pub enum PosixProperty {
        Alnum => ["alnum"],
        Blank => ["blank"],
        Graph => ["graph"],
        Print => ["print"],
        Word => ["word"],
        Xdigit => ["xdigit"],
    }
}

define_aliases! {
    pub enum NumericType {
        Decimal => ["decimal"],
        Digit => ["digit"],
        Numeric => ["numeric"],
    }
}

/// PCRE's special categories. Spelled exactly, without normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PcreSpecial {
    AlphaNumeric,
    PosixSpace,
    PerlSpace,
    UniversallyNamed,
    PerlWord,
}

impl PcreSpecial {
    pub fn from_raw(s: &str) -> Option<Self> {
        Some(match s {
            "Xan" => Self::AlphaNumeric,
            "Xps" => Self::PosixSpace,
            "Xsp" => Self::PerlSpace,
            "Xuc" => Self::UniversallyNamed,
            "Xwd" => Self::PerlWord,
            _ => return None,
        })
    }
}

/// `java.lang.Character` predicates exposed by Java's regex engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum JavaSpecial {
    Alphabetic,
    Defined,
    Digit,
    IdentifierIgnorable,
    Ideographic,
    IsoControl,
    JavaIdentifierPart,
    JavaIdentifierStart,
    JavaLetter,
    JavaLetterOrDigit,
    LowerCase,
    Mirrored,
    SpaceChar,
    TitleCase,
    UnicodeIdentifierPart,
    UnicodeIdentifierStart,
    UpperCase,
    Whitespace,
}

impl JavaSpecial {
    pub fn from_raw(s: &str) -> Option<Self> {
        Some(match s {
            "javaAlphabetic" => Self::Alphabetic,
            "javaDefined" => Self::Defined,
            "javaDigit" => Self::Digit,
            "javaIdentifierIgnorable" => Self::IdentifierIgnorable,
            "javaIdeographic" => Self::Ideographic,
            "javaISOControl" => Self::IsoControl,
            // The doubled prefix is the real spelling.
            "javaJavaIdentifierPart" => Self::JavaIdentifierPart,
            "javaJavaIdentifierStart" => Self::JavaIdentifierStart,
            "javaLetter" => Self::JavaLetter,
            "javaLetterOrDigit" => Self::JavaLetterOrDigit,
            "javaLowerCase" => Self::LowerCase,
            "javaMirrored" => Self::Mirrored,
            "javaSpaceChar" => Self::SpaceChar,
            "javaTitleCase" => Self::TitleCase,
            "javaUnicodeIdentifierPart" => Self::UnicodeIdentifierPart,
            "javaUnicodeIdentifierStart" => Self::UnicodeIdentifierStart,
            "javaUpperCase" => Self::UpperCase,
            "javaWhitespace" => Self::Whitespace,
            _ => return None,
        })
    }
}
