use std::collections::HashMap;
use crate::models::Emoji;

/// The votable emoji, in the order clients see them listed.
const TOP_EMOJI: &[(&str, &str)] = &[
    (":joy:", "😂"),
    (":sunglasses:", "😎"),
    (":doughnut:", "🍩"),
    (":stuck_out_tongue_winking_eye:", "😜"),
    (":money_mouth_face:", "🤑"),
    (":flushed:", "😳"),
    (":mask:", "😷"),
    (":nerd_face:", "🤓"),
    (":ghost:", "👻"),
    (":skull_and_crossbones:", "☠️"),
    (":heart_eyes_cat:", "😻"),
    (":hear_no_evil:", "🙉"),
    (":see_no_evil:", "🙈"),
    (":speak_no_evil:", "🙊"),
    (":boy:", "👦"),
    (":girl:", "👧"),
    (":man:", "👨"),
    (":woman:", "👩"),
    (":older_man:", "👴"),
    (":policeman:", "👮"),
    (":guardsman:", "💂"),
    (":construction_worker_man:", "👷"),
    (":prince:", "🤴"),
    (":princess:", "👸"),
    (":man_in_tuxedo:", "🤵"),
    (":bride_with_veil:", "👰"),
    (":mrs_claus:", "🤶"),
    (":santa:", "🎅"),
    (":turkey:", "🦃"),
    (":rabbit:", "🐰"),
    (":no_good_woman:", "🙅"),
    (":ok_woman:", "🙆"),
    (":raising_hand_woman:", "🙋"),
    (":bowing_man:", "🙇"),
    (":man_facepalming:", "🤦‍♂️"),
    (":woman_shrugging:", "🤷‍♀️"),
    (":massage_woman:", "💆"),
    (":walking_man:", "🚶"),
    (":running_man:", "🏃"),
    (":dancer:", "💃"),
    (":man_dancing:", "🕺"),
    (":dancing_women:", "👯"),
    (":rainbow:", "🌈"),
    (":skier:", "⛷"),
    (":golfing_man:", "🏌️"),
    (":surfing_man:", "🏄"),
    (":basketball_man:", "⛹️"),
    (":biking_man:", "🚴"),
    (":point_up_2:", "👆"),
    (":vulcan_salute:", "🖖"),
    (":metal:", "🤘"),
    (":call_me_hand:", "🤙"),
    (":thumbsup:", "👍"),
    (":wave:", "👋"),
    (":clap:", "👏"),
    (":raised_hands:", "🙌"),
    (":pray:", "🙏"),
    (":dog:", "🐶"),
    (":cat2:", "🐈"),
    (":pig:", "🐷"),
    (":hatching_chick:", "🐣"),
    (":snail:", "🐌"),
    (":bacon:", "🥓"),
    (":pizza:", "🍕"),
    (":taco:", "🌮"),
    (":burrito:", "🌯"),
    (":ramen:", "🍜"),
    (":champagne:", "🍾"),
    (":tropical_drink:", "🍹"),
    (":beer:", "🍺"),
    (":tumbler_glass:", "🥃"),
    (":world_map:", "🗺"),
    (":beach_umbrella:", "⛱"),
    (":mountain_snow:", "🏔"),
    (":camping:", "🏕"),
    (":steam_locomotive:", "🚂"),
    (":flight_departure:", "🛫"),
    (":rocket:", "🚀"),
    (":star2:", "🌟"),
    (":sun_behind_small_cloud:", "🌤"),
    (":cloud_with_rain:", "🌧"),
    (":fire:", "🔥"),
    (":jack_o_lantern:", "🎃"),
    (":balloon:", "🎈"),
    (":tada:", "🎉"),
    (":trophy:", "🏆"),
    (":iphone:", "📱"),
    (":pager:", "📟"),
    (":fax:", "📠"),
    (":bulb:", "💡"),
    (":money_with_wings:", "💸"),
    (":crystal_ball:", "🔮"),
    (":underage:", "🔞"),
    (":interrobang:", "⁉️"),
    (":100:", "💯"),
    (":checkered_flag:", "🏁"),
    (":crossed_swords:", "⚔️"),
    (":floppy_disk:", "💾"),
    (":poop:", "💩"),
];

/// Read-only list of votable emoji with exact-match lookup by shortcode.
#[derive(Debug, Clone)]
pub struct Catalog {
    emoji: Vec<Emoji>,
    by_shortcode: HashMap<String, usize>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::from_entries(TOP_EMOJI.iter().copied())
    }

    /// Builds a catalog from `(shortcode, unicode)` pairs. The first
    /// occurrence of a repeated shortcode wins.
    pub fn from_entries<S, U>(entries: impl IntoIterator<Item = (S, U)>) -> Self
    where
        S: Into<String>,
        U: Into<String>,
    {
        let mut emoji = Vec::new();
        let mut by_shortcode = HashMap::new();

        for (shortcode, unicode) in entries {
            let shortcode = shortcode.into();
            if by_shortcode.contains_key(&shortcode) {
                continue;
            }
            by_shortcode.insert(shortcode.clone(), emoji.len());
            emoji.push(Emoji { shortcode, unicode: unicode.into() });
        }

        Self { emoji, by_shortcode }
    }

    pub fn list(&self) -> &[Emoji] {
        &self.emoji
    }

    pub fn find_by_shortcode(&self, shortcode: &str) -> Option<&Emoji> {
        self.by_shortcode.get(shortcode).and_then(|&idx| self.emoji.get(idx))
    }

    pub fn len(&self) -> usize {
        self.emoji.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emoji.is_empty()
    }
}
