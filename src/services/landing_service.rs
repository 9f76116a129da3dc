// src/services/landing_service.rs

use rand::{seq::SliceRandom, Rng};

use crate::{
    common::error::AppError,
    db::ReviewRepository,
    models::landing::{ReviewFragment, WordDirection, WordItem, WordStream, WordStreamParams},
};

const FRAGMENT_MAX_WORDS: usize = 6;
const RECENT_COMMENTS: i64 = 50;
/// Média a partir da qual um comentário conta como positivo.
const POSITIVE_MEAN_RATING: i32 = 60;

const NEUTRAL_LIGHT: &str = "#E6E6E6";
const NEUTRAL_DARK: &str = "#A3A3A3";

const BUILTIN_FRAGMENTS: &[(&str, bool)] = &[
    // EN
    ("Berghain door harsh tonight", false),
    ("Berghain sound shook bones", true),
    ("Watergate terrace sunrise magic", true),
    ("Watergate too touristy lately", false),
    ("Kater Blau river vibe perfect", true),
    ("Kater Blau line unbearable", false),
    ("Sisyphos morning energy unreal", true),
    ("Sisyphos dusty and crowded", false),
    ("Tresor raw techno done right", true),
    ("Tresor basement heat brutal", false),
    ("Wilde Renate quirky rooms fun", true),
    ("Renate door vibe unfriendly", false),
    ("about blank floor delivered", true),
    ("about blank toilets a mess", false),
    ("Club der Visionaere sunset bliss", true),
    ("CDV drinks overpriced tonight", false),
    ("Klunkerkranich rooftop view insane", true),
    ("Klunkerkranich queue forever long", false),
    ("Buck and Breck cocktails surgical", true),
    ("Buck and Breck reservation hassle", false),
    ("Green Door bartenders nailed classics", true),
    ("Green Door too dark inside", false),

    // DE
    ("Berghain Tür heute hart", false),
    ("Berghain Sound enorm stark", true),
    ("Watergate Terrasse Sonnenaufgang magisch", true),
    ("Watergate inzwischen zu touristisch", false),
    ("Kater Blau Flussvibe perfekt", true),
    ("Kater Blau Schlange endlos", false),
    ("Sisyphos Morgenenergie irre gut", true),
    ("Sisyphos staubig und voll", false),
    ("Tresor roher Techno vom Feinsten", true),
    ("Tresor unten viel zu heiß", false),
    ("Wilde Renate verrückte Räume Spaß", true),
    ("Renate Türlaune unfreundlich", false),
    ("about blank Floor hat geliefert", true),
    ("about blank Toiletten chaotisch", false),
    ("Club der Visionäre Sonnenuntergang traumhaft", true),
    ("CDV Getränke heute zu teuer", false),
    ("Klunkerkranich Dachblick der Wahnsinn", true),
    ("Klunkerkranich Warten ewig", false),
    ("Buck and Breck Cocktails präzise", true),
    ("Buck and Breck Reservierung nervt", false),
    ("Green Door Barkeeper top", true),
    ("Green Door innen zu dunkel", false),

    // ES
    ("Puerta de Berghain dura", false),
    ("Sonido de Berghain brutal", true),
    ("Amanecer en Watergate mágico", true),
    ("Watergate demasiado turístico", false),
    ("Kater Blau junto al río perfecto", true),
    ("Cola de Kater Blau eterna", false),
    ("Energía matinal en Sisyphos increíble", true),
    ("Sisyphos polvoriento y lleno", false),
    ("Tresor techno crudo de verdad", true),
    ("Sótano de Tresor sofocante", false),
    ("Renate salas raras divertidas", true),
    ("Renate puerta antipática", false),
    ("about blank pista cumplió", true),
    ("about blank baños desastrosos", false),
    ("Club der Visionäre atardecer hermoso", true),
    ("CDV copas caras hoy", false),
    ("Vista de Klunkerkranich tremenda", true),
    ("Fila en Klunkerkranich interminable", false),
    ("Buck and Breck cócteles finos", true),
    ("Buck and Breck reserva pesada", false),
    ("Green Door bartenders excelentes", true),
    ("Green Door demasiado oscuro dentro", false),

    // FR
    ("Porte de Berghain sévère", false),
    ("Son de Berghain monstrueux", true),
    ("Aube magique à Watergate", true),
    ("Watergate trop touristique", false),
    ("Kater Blau au bord de l’eau parfait", true),
    ("File de Kater Blau sans fin", false),
    ("Énergie du matin à Sisyphos folle", true),
    ("Sisyphos poussiéreux et bondé", false),
    ("Tresor techno brut impeccable", true),
    ("Sous-sol de Tresor étouffant", false),
    ("Renate salles déjantées amusantes", true),
    ("Renate accueil porte froid", false),
    ("about blank a bien livré", true),
    ("Toilettes d’about blank en vrac", false),
    ("Coucher de soleil au Club der Visionäre", true),
    ("CDV verres trop chers ce soir", false),
    ("Vue de Klunkerkranich dingue", true),
    ("Queue Klunkerkranich interminable", false),
    ("Buck and Breck cocktails précis", true),
    ("Buck and Breck réservation pénible", false),
    ("Green Door barmen au top", true),
    ("Green Door trop sombre dedans", false),

    // ZH
    ("Berghain 门口很严", false),
    ("Berghain 声场很猛", true),
    ("Watergate 日出太美了", true),
    ("Watergate 游客有点多", false),
    ("Kater Blau 河边氛围绝", true),
    ("Kater Blau 排队太久", false),
    ("Sisyphos 早晨能量爆", true),
    ("Sisyphos 灰大人多", false),
    ("Tresor 工业味很正", true),
    ("Tresor 地下太闷热", false),
    ("Renate 房间又疯又好玩", true),
    ("Renate 门口脸色差", false),
    ("about blank 舞池给力", true),
    ("about blank 卫生间一团糟", false),
    ("Club der Visionäre 日落很美", true),
    ("CDV 酒水今天偏贵", false),
    ("Klunkerkranich 天台视野逆天", true),
    ("Klunkerkranich 队伍太长", false),
    ("Buck and Breck 调酒很准", true),
    ("Buck and Breck 订位太麻烦", false),
    ("Green Door 调酒师很稳", true),
    ("Green Door 里面太暗", false),

    // RU
    ("В Berghain жёсткий фейс-контроль", false),
    ("Звук в Berghain мощнейший", true),
    ("Рассвет на Watergate волшебный", true),
    ("Watergate стал слишком туристическим", false),
    ("Kater Blau у реки — идеально", true),
    ("Очередь в Kater Blau бесконечная", false),
    ("Утренний вайб Sisyphos безумный", true),
    ("Sisyphos пыльно и тесно", false),
    ("Tresor — честный сырой техно", true),
    ("Подвал Tresor душный и жаркий", false),
    ("Renate — странные комнаты, весело", true),
    ("Renate — недружелюбный вход", false),
    ("about blank — танцпол зажёг", true),
    ("about blank — туалеты ужас", false),
    ("Закат в Club der Visionäre красив", true),
    ("CDV — напитки дорогие сегодня", false),
    ("Вид с Klunkerkranich сумасшедший", true),
    ("Очередь в Klunkerkranich бесконечна", false),
    ("Buck and Breck — коктейли точные", true),
    ("Buck and Breck — бронь утомляет", false),
    ("Green Door — бармены отличные", true),
    ("Green Door — внутри слишком темно", false),

    // IT
    ("Porta del Berghain dura", false),
    ("Suono al Berghain pazzesco", true),
    ("Alba al Watergate magica", true),
    ("Watergate troppo turistico", false),
    ("Kater Blau sul fiume perfetto", true),
    ("Coda di Kater Blau infinita", false),
    ("Energia mattutina a Sisyphos folle", true),
    ("Sisyphos polveroso e pieno", false),
    ("Tresor techno grezzo fatto bene", true),
    ("Sotterraneo di Tresor soffocante", false),
    ("Renate stanze folli divertenti", true),
    ("Renate porta poco amichevole", false),
    ("about blank pista ha spaccato", true),
    ("Bagni di about blank disastro", false),
    ("Tramonto a Club der Visionäre splendido", true),
    ("CDV drink troppo cari stasera", false),
    ("Vista Klunkerkranich pazzesca", true),
    ("Fila a Klunkerkranich interminabile", false),
    ("Buck and Breck cocktail chirurgici", true),
    ("Buck and Breck prenotazione rognosa", false),
    ("Green Door bartender eccellenti", true),
    ("Green Door troppo buio dentro", false),

    // HI
    ("Berghain का दरवाज़ा सख्त", false),
    ("Berghain का साउंड दमदार", true),
    ("Watergate की सुबह जादुई", true),
    ("Watergate अब बहुत टूरिस्ट", false),
    ("Kater Blau नदी किनारे बढ़िया", true),
    ("Kater Blau की कतार अंतहीन", false),
    ("Sisyphos सुबह की एनर्जी पागल", true),
    ("Sisyphos धूल और भीड़", false),
    ("Tresor रॉ टेक्नो सही", true),
    ("Tresor बेसमेंट बहुत गर्म", false),
    ("Renate के कमरे मज़ेदार", true),
    ("Renate एंट्री पर व्यवहार ठंडा", false),
    ("about blank डांसफ्लोर धमाकेदार", true),
    ("about blank के बाथरूम गंदे", false),
    ("Club der Visionäre का सनसेट खूबसूरत", true),
    ("CDV ड्रिंक्स आज महंगे", false),
    ("Klunkerkranich का व्यू कमाल", true),
    ("Klunkerkranich में इंतज़ार लंबा", false),
    ("Buck and Breck कॉकटेल बेहतरीन", true),
    ("Buck and Breck की बुकिंग झंझट", false),
    ("Green Door बारटेंडर बढ़िया", true),
    ("Green Door अंदर बहुत अंधेरा", false),

    // AR
    ("باب برغهاين قاسٍ الليلة", false),
    ("صوت برغهاين هائل", true),
    ("شروق ووترغيت سحري", true),
    ("ووترغيت سياحي جدًا الآن", false),
    ("كاتر بلاو على النهر رائع", true),
    ("طابور كاتر بلاو لا ينتهي", false),
    ("طاقة الصباح في سيزيفوس مجنونة", true),
    ("سيزيفوس مغبر ومزدحم", false),
    ("تريزور تكنو خام ممتاز", true),
    ("قبو تريزور خانق وحار", false),
    ("رِيناتِه غرف غريبة وممتعة", true),
    ("مدخل رِيناتِه غير ودّي", false),
    ("about blank أرضية رقص اشتعلت", true),
    ("حمّامات about blank فوضى", false),
    ("غروب نادي فيزيونيري جميل", true),
    ("مشروبات CDV غالية الليلة", false),
    ("منظر كلونكركرانيخ مذهل", true),
    ("طابور كلونكركرانيخ طويل جدًا", false),
    ("Buck and Breck كوكتيلات متقنة", true),
    ("حجز Buck and Breck مزعج", false),
    ("Green Door السقاة ممتازون", true),
    ("Green Door داخله مظلم جدًا", false),

    // TR
    ("Berghain kapı çok sert", false),
    ("Berghain ses efsane güçlü", true),
    ("Watergate şafak manzarası büyülü", true),
    ("Watergate fazla turistik oldu", false),
    ("Kater Blau nehir kıyısı harika", true),
    ("Kater Blau kuyruğu bitmiyor", false),
    ("Sisyphos sabah enerjisi çılgın", true),
    ("Sisyphos tozlu ve kalabalık", false),
    ("Tresor ham techno yerinde", true),
    ("Tresor bodrumu bunaltıcı sıcak", false),
    ("Renate odalar tuhaf eğlenceli", true),
    ("Renate kapı tavrı soğuk", false),
    ("about blank pist ateşledi", true),
    ("about blank tuvaletler darmadağın", false),
    ("Club der Visionäre gün batımı efsane", true),
    ("CDV içkiler bu gece pahalı", false),
    ("Klunkerkranich manzara akıl almaz", true),
    ("Klunkerkranich bekleme sonsuz", false),
    ("Buck and Breck kokteyller ustalık işi", true),
    ("Buck and Breck rezervasyon dertli", false),
    ("Green Door barmenler çok iyi", true),
    ("Green Door içerisi aşırı karanlık", false),
];

#[derive(Debug, Clone, Copy, PartialEq)]
struct Hsl {
    h: f64,
    s: f64,
    l: f64,
}

/// Aceita `#RRGGBB` ou `RRGGBB`; devolve a cor sempre com `#` e os canais.
fn parse_hex(hex: &str) -> Option<(String, (u8, u8, u8))> {
    let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    let rgb = (channel(0..2)?, channel(2..4)?, channel(4..6)?);
    Some((format!("#{digits}"), rgb))
}

fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let (r, g, b) = (f64::from(r) / 255.0, f64::from(g) / 255.0, f64::from(b) / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl { h: 0.0, s: 0.0, l: l * 100.0 };
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl { h: h / 6.0 * 360.0, s: s * 100.0, l: l * 100.0 }
}

fn hsl_to_hex(color: Hsl) -> String {
    let h = color.h / 360.0;
    let s = color.s / 100.0;
    let l = color.l / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match (h * 6.0).floor() as i64 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        5 => (c, 0.0, x),
        _ => (0.0, 0.0, 0.0),
    };

    let to_byte = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    format!("#{:02x}{:02x}{:02x}", to_byte(r), to_byte(g), to_byte(b))
}

/// Base, três tons mais claros, três mais escuros, dois vizinhos de matiz e dois cinzas.
pub fn palette(base_hex: &str) -> Result<Vec<String>, AppError> {
    let (base_color, (r, g, b)) = parse_hex(base_hex)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid base color: {base_hex}")))?;
    let base = rgb_to_hsl(r, g, b);

    let lighter = |delta: f64| hsl_to_hex(Hsl { l: (base.l + delta).min(100.0), ..base });
    let darker = |delta: f64| hsl_to_hex(Hsl { l: (base.l - delta).max(0.0), ..base });
    let hue = |h: f64| hsl_to_hex(Hsl { h, ..base });

    Ok(vec![
        base_color,
        lighter(8.0),
        lighter(16.0),
        lighter(24.0),
        darker(8.0),
        darker(16.0),
        darker(24.0),
        hue((base.h + 8.0) % 360.0),
        hue((base.h - 8.0 + 360.0) % 360.0),
        NEUTRAL_LIGHT.to_string(),
        NEUTRAL_DARK.to_string(),
    ])
}

/// Corta o comentário nas primeiras palavras.
pub fn fragment_from_comment(comment: &str, mean_rating: i32) -> Option<ReviewFragment> {
    let words: Vec<&str> = comment.split_whitespace().take(FRAGMENT_MAX_WORDS).collect();
    if words.is_empty() {
        return None;
    }
    Some(ReviewFragment {
        text: words.join(" "),
        is_positive: mean_rating >= POSITIVE_MEAN_RATING,
    })
}

pub fn builtin_fragments() -> Vec<ReviewFragment> {
    BUILTIN_FRAGMENTS
        .iter()
        .map(|(text, is_positive)| ReviewFragment { text: text.to_string(), is_positive: *is_positive })
        .collect()
}

pub fn generate<R: Rng + ?Sized>(
    params: &WordStreamParams,
    fragments: &[ReviewFragment],
    palette: &[String],
    rng: &mut R,
) -> Vec<WordItem> {
    let positives: Vec<&ReviewFragment> = fragments.iter().filter(|f| f.is_positive).collect();
    let negatives: Vec<&ReviewFragment> = fragments.iter().filter(|f| !f.is_positive).collect();
    if fragments.is_empty() || palette.is_empty() {
        return Vec::new();
    }

    let mut items = Vec::with_capacity(params.density as usize);
    for id in 0..params.density {
        let wants_positive = rng.gen_bool(params.positive_rate);
        let pool = match (wants_positive, positives.is_empty(), negatives.is_empty()) {
            (true, false, _) | (false, _, true) => &positives,
            _ => &negatives,
        };
        let Some(fragment) = pool.choose(rng) else { continue };

        let direction = if rng.gen_bool(0.5) { WordDirection::Up } else { WordDirection::Down };

        // Descendo: nasce entre -50vh e -400vh. Subindo: 50vh abaixo do container.
        let start_offset: f64 = match direction {
            WordDirection::Down => -(50.0 + rng.gen_range(0.0..350.0)),
            WordDirection::Up => 50.0,
        };

        let speed_variation = 0.8 + rng.gen_range(0.0..0.9);
        let duration = (8.0 + rng.gen_range(0.0..10.0)) * speed_variation;

        let travel_time = start_offset.abs() / (100.0 * speed_variation);
        let base_delay = match direction {
            WordDirection::Down => travel_time * (0.8 + rng.gen_range(0.0..0.4)),
            WordDirection::Up => rng.gen_range(0.0..10.0),
        };

        // Fase negativa: cada item já começa num ponto diferente da animação.
        let phase_delay = -rng.gen_range(0.0..duration);

        let sway_amp = (rng.r#gen::<f64>() - 0.5) * 40.0;
        let sway_dur = 1.6 + rng.gen_range(0.0..2.2);
        let sway_phase = rng.gen_range(0.0..sway_dur);

        let color = palette.choose(rng).cloned().unwrap_or_default();

        items.push(WordItem {
            id,
            text: fragment.text.clone(),
            x: rng.gen_range(0.0..100.0),
            direction,
            delay: base_delay.max(0.0),
            duration,
            phase_delay,
            scale: 0.9 + rng.gen_range(0.0..0.3),
            opacity: 0.4 + rng.gen_range(0.0..0.4),
            color,
            start_offset,
            sway_amp,
            sway_dur,
            sway_phase,
        });
    }
    items
}

#[derive(Clone)]
pub struct LandingService {
    review_repo: ReviewRepository,
}

impl LandingService {
    pub fn new(review_repo: ReviewRepository) -> Self {
        Self { review_repo }
    }

    /// Fragmentos das reviews recentes; se faltar positivo ou negativo, usa a lista fixa.
    pub async fn fragments(&self) -> Result<Vec<ReviewFragment>, AppError> {
        let comments = self.review_repo.recent_comments(RECENT_COMMENTS).await?;
        let fragments: Vec<ReviewFragment> = comments
            .iter()
            .filter_map(|(comment, mean)| fragment_from_comment(comment, *mean))
            .collect();

        let has_both = fragments.iter().any(|f| f.is_positive) && fragments.iter().any(|f| !f.is_positive);
        if has_both {
            Ok(fragments)
        } else {
            Ok(builtin_fragments())
        }
    }

    pub async fn word_stream(&self, params: &WordStreamParams) -> Result<WordStream, AppError> {
        let palette = palette(&params.base_color)?;
        let fragments = self.fragments().await?;
        // thread_rng não é Send: só depois do último await.
        let items = generate(params, &fragments, &palette, &mut rand::thread_rng());
        Ok(WordStream { palette, items })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn params(density: u32, positive_rate: f64) -> WordStreamParams {
        WordStreamParams { density, positive_rate, base_color: "#8ACE00".into() }
    }

    #[test]
    fn palette_has_eleven_colors_starting_with_base() {
        let colors = palette("#8ACE00").unwrap();
        assert_eq!(colors.len(), 11);
        assert_eq!(colors[0], "#8ACE00");
        assert_eq!(colors[9], "#E6E6E6");
        assert_eq!(colors[10], "#A3A3A3");
        assert!(colors.iter().all(|c| c.len() == 7 && c.starts_with('#')));
    }

    #[test]
    fn base_without_hash_is_normalized() {
        let colors = palette("8ACE00").unwrap();
        assert_eq!(colors[0], "#8ACE00");
        assert!(colors.iter().all(|c| c.starts_with('#') && c.len() == 7));
        assert_eq!(colors, palette("#8ACE00").unwrap());
    }

    #[test]
    fn hsl_conversion_round_trips_primaries() {
        for (hex, rgb) in [("#ff0000", (255, 0, 0)), ("#00ff00", (0, 255, 0)), ("#0000ff", (0, 0, 255))] {
            let hsl = rgb_to_hsl(rgb.0, rgb.1, rgb.2);
            assert_eq!(hsl_to_hex(hsl), hex);
        }
    }

    #[test]
    fn grey_has_no_saturation() {
        let hsl = rgb_to_hsl(128, 128, 128);
        assert_eq!(hsl.s, 0.0);
        assert_eq!(hsl_to_hex(hsl), "#808080");
    }

    #[test]
    fn lightness_is_clamped() {
        let colors = palette("#ffffff").unwrap();
        // clarear o branco continua branco
        assert_eq!(colors[1], "#ffffff");
        let colors = palette("#000000").unwrap();
        assert_eq!(colors[4], "#000000");
    }

    #[test]
    fn invalid_base_color_is_bad_request() {
        assert!(matches!(palette("green"), Err(AppError::BadRequest(_))));
        assert!(matches!(palette("#12345"), Err(AppError::BadRequest(_))));
        assert!(matches!(palette("#zzzzzz"), Err(AppError::BadRequest(_))));
        assert!(matches!(palette("+f+f+f"), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn fragments_keep_first_words() {
        let f = fragment_from_comment("  the bass in the main room was unreal tonight ", 90).unwrap();
        assert_eq!(f.text, "the bass in the main room");
        assert!(f.is_positive);
        assert!(!fragment_from_comment("door was rude", 30).unwrap().is_positive);
        assert!(fragment_from_comment("   ", 80).is_none());
    }

    #[test]
    fn builtin_fragments_are_balanced() {
        let fragments = builtin_fragments();
        let positives = fragments.iter().filter(|f| f.is_positive).count();
        assert_eq!(fragments.len(), 220);
        assert_eq!(positives, fragments.len() - positives);
    }

    #[test]
    fn generated_items_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let colors = palette("#8ACE00").unwrap();
        let items = generate(&params(120, 0.6), &builtin_fragments(), &colors, &mut rng);

        assert_eq!(items.len(), 120);
        for item in &items {
            assert!((0.0..=100.0).contains(&item.x));
            assert!((0.9..=1.2).contains(&item.scale));
            assert!((0.4..=0.8).contains(&item.opacity));
            assert!(item.delay >= 0.0);
            assert!(item.phase_delay <= 0.0 && item.phase_delay >= -item.duration);
            assert!(item.duration >= 8.0 * 0.8 && item.duration <= 18.0 * 1.7);
            assert!(item.sway_amp.abs() <= 20.0);
            assert!((1.6..=3.8).contains(&item.sway_dur));
            assert!(colors.contains(&item.color));
            match item.direction {
                WordDirection::Up => assert_eq!(item.start_offset, 50.0),
                WordDirection::Down => assert!(item.start_offset <= -50.0 && item.start_offset >= -400.0),
            }
        }
    }

    #[test]
    fn positive_rate_extremes_pick_one_pool() {
        let fragments = builtin_fragments();
        let colors = palette("#8ACE00").unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let all_positive = generate(&params(40, 1.0), &fragments, &colors, &mut rng);
        let positive_texts: Vec<&str> = fragments.iter().filter(|f| f.is_positive).map(|f| f.text.as_str()).collect();
        assert!(all_positive.iter().all(|i| positive_texts.contains(&i.text.as_str())));

        let all_negative = generate(&params(40, 0.0), &fragments, &colors, &mut rng);
        assert!(all_negative.iter().all(|i| !positive_texts.contains(&i.text.as_str())));
    }

    #[test]
    fn empty_inputs_produce_nothing() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(generate(&params(10, 0.5), &[], &["#000000".into()], &mut rng).is_empty());
        assert!(generate(&params(0, 0.5), &builtin_fragments(), &["#000000".into()], &mut rng).is_empty());
    }
}
