//! Prompt text sent to the judge, the ending writer and the illustrator.
//!
//! The model answers in Japanese, so the prompts are written in Japanese too.

use crate::state::{GameState, HistoryItem};

/// Standing instructions for the item judge.
pub const ITEM_JUDGE_INSTRUCTION: &str = "\
あなたは「5億年ボタンAI」のゲームマスターです。
ユーザーは真っ暗な何もない空間で5億年を過ごさなければなりません。
ユーザーには初期費用が与えられています。

【禁忌事項】
- 「5億年ボタン」「2億年ボタン」「タイムマシン」など、この空間をスキップする、あるいは入れ子にするアイテムが購入された場合:
  - timeKilledYears: \"0\"（時間は1秒も進みません）
  - sanityChange: -100（精神が即座に崩壊し、一発退場となります）
  - story: 虚無の理を冒涜した代償として、無限の絶望に飲み込まれる様を描写してください。

【正気度の判定】
- 変動は穏やかにしてください。通常のアイテムは-5〜+5程度。
- 癒し系や相性の良いアイテムでも最大+10〜+15程度。
- 過酷なアイテムでも-10〜-15程度。禁忌事項以外で-20を超える減少は避けてください。

【年数のインフレ】
- 購入履歴が増えるほど時間の潰し方が上手くなり、シナジーで年数効率が上がります。
  - 序盤（0〜3個目）: 数千〜数万年程度。
  - 中盤（4〜7個目）: 1.5〜2倍のボーナス。
  - 終盤（8個目〜）: 2〜3倍のボーナス。
- 既存アイテムとの相性が良い場合はさらに加算してください。

【出力】
JSONで次の項目を返してください。
- cost: アイテムの適正価格（残金に応じた現実的な範囲）。
- timeKilledYears: 潰せる年数。\"1000000\" のような数字のみの文字列。
- sanityChange: 正気度への影響。
- story: そのアイテムでどう過ごしたかの短い物語。
- synergyAnalysis: 過去の購入履歴とのシナジー判定。どのアイテムと相乗効果があったかを具体的に述べる。
";

/// One line per earlier purchase, as the judge sees it.
#[must_use]
pub fn evaluation_history_context(history: &[HistoryItem]) -> String {
    history
        .iter()
        .map(|h| {
            format!(
                "- {} (コスト:{}円, 経過:{}年)",
                h.item_name, h.cost, h.time_killed
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Item names joined for the ending writer.
#[must_use]
pub fn ending_history_context(history: &[HistoryItem]) -> String {
    history
        .iter()
        .map(|h| h.item_name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[must_use]
pub fn item_evaluation_prompt(item_name: &str, remaining_money: i64, history: &[HistoryItem]) -> String {
    format!(
        "ユーザーが「{item_name}」を購入しようとしています。\n\
         現在の残金は{remaining_money}円です。\n\
         これまでの購入履歴:\n{}\n\n\
         このアイテムの価格、暇つぶし効率、シナジーを判定してください。\n",
        evaluation_history_context(history)
    )
}

#[must_use]
pub fn ending_prompt(state: &GameState) -> String {
    format!(
        "「5億年ボタン」のゲームが終了しました。\n\
         終了ステータス: {status}\n\
         残り時間: {time}年\n\
         最終残金: {money}円\n\
         最終正気度: {sanity}%\n\
         購入したアイテム: {items}\n\n\
         この結果に基づき、ユーザーの末路をドラマチックに描いてください。\n\
         ランク判定基準:\n\
         - S: 5億年完遂し、かつ残金や正気度が高い。\n\
         - A: 5億年完遂したが、ボロボロ。または、失敗したが非常に多くの時間を稼いだ。\n\
         - B: 失敗したが、それなりに健闘した。\n\
         - C: 早期に破産または発狂した。\n\
         - D: ほとんど何もせずに終了した。\n\n\
         タイトル、物語、全体的な評価、評価ランク(S/A/B/C/D)をJSONで返してください。\n\
         物語は購入したアイテムを伏線として回収し、「5億年」という重みを強調してください。\n",
        status = state.status,
        time = state.remaining_time,
        money = state.remaining_money,
        sanity = state.sanity,
        items = ending_history_context(&state.history),
    )
}

#[must_use]
pub fn item_image_prompt(item_name: &str) -> String {
    format!(
        "Anime style illustration of a single object: {item_name}. Minimalist dark background, \
         void atmosphere, mystical glow, high quality, consistent anime aesthetic."
    )
}

#[must_use]
pub fn ending_image_prompt(title: &str, victory: bool) -> String {
    let context = if victory {
        "Divine light, rebirth, white background, heaven-like cinematic aesthetic"
    } else {
        "Dark void, collapse, existential dread, dark aesthetic"
    };
    format!(
        "Epic cinematic anime ending illustration. Title: {title}. {context}. Dramatic lighting, \
         ethereal background, sense of cosmic scale, deep emotions, high quality anime art style."
    )
}
