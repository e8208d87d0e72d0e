//! Static taunt lines, used whenever the generator fails.

use crate::core::{RandomSource, Region};

pub const BISAYA_TAUNTS: [&str; 12] = [
    "Unsa man? Luoy ka!",
    "Hadlok ka? Kuyaw ko!",
    "Maayo pa ko ug tubâ, talo gihapon ka!",
    "Kusog-kusog pa oy!",
    "Kana ra? Sayang!",
    "Pahawa! Dili ka makaagak!",
    "Unsa diay? Kulba na?",
    "Maski buang ko, mapildi ka gihapon!",
    "Tan-awon nato kinsa mas lig-on!",
    "Ayaw og laom, padayon lang!",
    "Grabe ka ka-weakling!",
    "Basin lang muhilak ka ron?",
];

pub const TAGALOG_TAUNTS: [&str; 12] = [
    "Ano ba yan? Kawawa ka!",
    "Takot ka? Malakas ako!",
    "Lasing pa ako, talo ka pa rin!",
    "Lumakas ka pa!",
    "Ganyan lang? Sayang!",
    "Umalis ka! Hindi ka makakasunod!",
    "Ano nga ba? Kinakabahan ka na?",
    "Kahit loko ako, talo ka pa rin!",
    "Tingnan natin kung sino mas malakas!",
    "Huwag kang sumuko, tuloy lang!",
    "Grabe ka naman ang hina!",
    "Baka umiyak ka na?",
];

#[must_use]
pub fn fallback_lines(region: Region) -> &'static [&'static str] {
    match region {
        Region::Bisaya => &BISAYA_TAUNTS,
        Region::Tagalog => &TAGALOG_TAUNTS,
    }
}

/// A uniformly random line for `region`.
pub(crate) fn pick<R: RandomSource>(region: Region, rng: &mut R) -> &'static str {
    let lines = fallback_lines(region);
    lines[rng.next_below(lines.len())]
}
