//! Static name tables

use std::collections::HashSet;
use std::sync::LazyLock;

/// Common Japanese surnames
pub const SURNAMES: &[&str] = &[
    "佐藤", "鈴木", "高橋", "田中", "伊藤", "渡辺", "山本", "中村", "小林", "加藤",
    "吉田", "山田", "佐々木", "山口", "松本", "井上", "木村", "林", "斎藤", "清水",
    "山崎", "森", "池田", "橋本", "阿部", "石川", "山下", "中島", "石井", "小川",
    "前田", "岡田", "長谷川", "藤田", "後藤", "近藤", "村上", "遠藤", "青木", "坂本",
    "斉藤", "福田", "太田", "西村", "藤井", "金子", "岡本", "藤原", "中野", "三浦",
    "原田", "中川", "松田", "竹内", "小野", "田村", "中山", "和田", "石田", "森田",
    "上田", "原", "内田", "柴田", "酒井", "宮崎", "横山", "高木", "安藤", "宮本",
    "大野", "小島", "谷口", "今井", "工藤", "高田", "増田", "丸山", "杉山", "村田",
    "大塚", "新井", "小山", "平野", "藤本", "河野", "上野", "野口", "武田", "松井",
    "千葉", "岩崎", "菅原", "木下", "久保", "佐野", "野村", "松尾", "市川", "菊地",
    "杉本", "古川", "大西", "島田", "水野", "桜井", "高野", "渡部", "吉川", "山内",
    "西田", "飯田", "菊池", "西川", "小松", "北村", "安田", "五十嵐", "川口", "平田",
    "関", "中田", "久保田", "服部", "東", "岩田", "土屋", "川崎", "福島", "本田",
    "辻", "樋口", "秋山", "田口", "永井", "山中", "中西", "吉村", "川上", "石原",
    "大橋", "松岡", "馬場", "浅野", "荒木", "大久保", "野田", "小沢", "田辺", "川村",
    "星野", "黒田", "堀", "尾崎", "望月", "永田", "熊谷", "内藤", "松村", "西山",
    "大谷", "平井", "大島", "岩本", "片山", "本間", "早川", "横田", "岡崎", "荒井",
    "大石", "鎌田", "成田", "宮田", "小田", "石橋", "篠原", "須藤", "河合", "大川",
    "高井", "松下", "吉岡", "中井", "小池", "宮下", "北川", "岡村", "上原", "松浦",
    "小西", "藤川", "浜田", "西岡", "菅野", "森本", "上村", "沢田", "内山", "堤",
    "桑原", "栗原", "矢野", "三上", "関口", "細川", "関根", "今村", "高山", "根本",
    "岡", "坂口", "竹田", "村井", "大森", "中尾", "奥村", "牧野", "杉浦", "小澤",
    "吉井", "片岡", "西尾", "田島", "富田", "中嶋", "植田", "榎本", "宇野", "柳田",
    "森下", "竹中", "三宅", "長田", "水谷", "原口", "堀内", "日高", "宮川", "寺田",
    "角田", "小倉", "安達", "金井", "青山", "吉野", "川島", "浅井", "大山", "村松",
    "秋元", "岩井", "新田", "野崎", "大竹", "滝沢", "松永", "福井", "福本", "織田",
    "米田", "岩瀬", "中本", "田代", "石塚", "大平", "桑田", "南", "小谷", "岸",
    "前川", "田原", "北野", "平山", "及川", "奥田", "白石", "宮内", "飯島", "若林",
    "西野", "川端", "土井", "安井", "広瀬", "野中", "稲垣", "加納", "坂田", "吉原",
    "志村", "三好", "山根", "小笠原", "石黒", "長尾", "小原", "竹下", "浅田", "星",
    "白井", "大木", "平松", "塚本", "田上", "水口", "川田", "徳永", "宮原", "古田",
];

/// Common Japanese given names
pub const GIVEN_NAMES: &[&str] = &[
    "太郎", "次郎", "三郎", "一郎", "健太", "翔太", "大輔", "拓也", "直樹", "和也",
    "達也", "哲也", "浩二", "健一", "誠", "学", "隆", "剛", "聡", "修",
    "大樹", "翔", "蓮", "湊", "悠真", "陽翔", "大翔", "悠人", "颯太", "陸",
    "健", "亮", "光", "翼", "拓海", "海斗", "颯", "陽太", "樹", "大和",
    "優斗", "奏太", "悠斗", "結翔", "朝陽", "陽向", "湊斗", "蒼", "律", "新",
    "隼人", "雄大", "慎也", "裕太", "俊介", "康平", "孝", "博", "勇気", "智也",
    "正樹", "秀樹", "浩", "清", "茂", "実", "進", "勉", "稔", "豊",
    "明", "昭", "弘", "勝", "洋", "徹", "勇", "正", "正人", "和彦",
    "信也", "雅人", "英樹", "義男", "幸雄", "健二", "健太郎", "雄一", "雄二", "恭平",
    "花子", "陽子", "洋子", "恵子", "京子", "幸子", "和子", "久美子", "由美子", "真由美",
    "美穂", "美香", "美紀", "美咲", "美優", "美月", "結衣", "結愛", "陽菜", "さくら",
    "葵", "凛", "芽依", "莉子", "紬", "結菜", "杏", "澪", "楓", "咲良",
    "愛", "彩", "舞", "恵", "愛子", "明美", "直美", "智子", "裕子", "由紀",
    "由香", "麻衣", "麻美", "奈々", "菜々子", "沙織", "香織", "詩織", "千尋", "真理",
    "理恵", "理沙", "里美", "亜美", "彩花", "綾香", "遥", "優子", "優花", "優奈",
    "愛美", "加奈子", "友美", "知美", "瞳", "翔子", "典子", "紀子", "節子", "順子",
    "悦子", "康子", "敦子", "弘子", "朋子", "由美", "千晴", "美奈子", "絵美", "真央",
    "未来", "琴音", "心春", "陽葵", "ひなた", "ゆい", "あかり", "はな", "みゆ", "かな",
    "千夏", "七海", "夏美", "春香", "秋子", "冬美", "桃子", "梨花", "菜摘", "若菜",
    "亮介", "慎太郎", "龍之介", "幸太郎", "浩一", "宏", "光太", "大地", "航", "駿",
];

/// Words that rule a candidate out as a personal name
pub const BLOCKLIST: &[&str] = &[
    "株式会社", "有限会社", "合同会社", "会社", "法人", "大学", "高校", "中学",
    "小学校", "学校", "学院", "学部", "学科", "研究科", "研究所", "病院", "銀行",
    "部長", "課長", "係長", "主任", "社長", "専務", "常務", "取締役", "代表", "理事",
    "担当", "営業", "開発", "技術", "事業", "本部", "支社", "支店", "工場", "部署",
    "職務", "経歴", "履歴", "学歴", "職歴", "資格", "免許", "趣味", "特技", "志望",
    "動機", "自己", "本人", "希望", "記入", "年月", "現在", "以上", "経験", "業務",
    "入社", "退社", "卒業", "入学", "修了", "中退", "所属", "勤務", "在籍", "同上",
    "住所", "電話", "連絡", "氏名", "名前", "性別", "生年", "年齢", "国籍", "備考",
    "市役所", "区役所", "県庁",
];

pub(crate) static SURNAME_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| SURNAMES.iter().copied().collect());

pub(crate) static GIVEN_NAME_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| GIVEN_NAMES.iter().copied().collect());

pub(crate) static MAX_SURNAME_CHARS: LazyLock<usize> =
    LazyLock::new(|| SURNAMES.iter().map(|s| s.chars().count()).max().unwrap_or(0));

pub(crate) static MAX_GIVEN_NAME_CHARS: LazyLock<usize> =
    LazyLock::new(|| GIVEN_NAMES.iter().map(|s| s.chars().count()).max().unwrap_or(0));
