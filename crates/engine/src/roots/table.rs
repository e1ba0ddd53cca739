//! Built-in trusted root keys.
//!
//! Each entry is the canonical hex of the `subjectPublicKey` contents of the
//! CA's self-signed root certificate: DER `RSAPublicKey` for RSA roots
//! (`3082010A...` for 2048-bit keys), uncompressed SEC1 point for EC roots
//! (`04...`). When a CA rotates its roots this table has to be updated and the
//! crate redeployed.
//!
//! The thawte and other Symantec-era roots (RSA and EC) are left out on
//! purpose: they have been distrusted and removed from the major root stores.

pub static BUILTIN_ROOTS: &[(&str, &str)] = &[
    (
        "DigiCert Global Root CA",
        concat!(
            "3082010A0282010100E23BE11172DEA8A4D3A357AA50A28F0B7790C9A2A5EE12CE965B010920CC0193A74E30B753F743",
            "C46900579DE28D22DD870640008109CECE1B83BFDFCD3B7146E2D666C705B37627168F7B9E1E957DEEB748A308DAD6AF",
            "7A0C3906657F4A5D1FBC17F8ABBEEE28D7747F7A78995985686E5C23324BBF4EC0E85A6DE370BF7710BFFC01F685D9A8",
            "44105832A97518D5D1A2BE47E2276AF49A33F84908608BD45FB43A84BFA1AA4A4C7D3ECF4F5F6C765EA04B37919EDC22",
            "E66DCE141A8E6ACBFECDB3146417C75B299E32BFF2EEFAD30B42D4ABB74132DA0CD4EFF881D5BB8D583FB51BE84928A2",
            "70DA3104DDF7B216F24C0A4E07A8ED4A3D5EB57FA390C3AF270203010001",
        ),
    ),
    (
        "DigiCert High Assurance EV Root CA",
        concat!(
            "3082010A0282010100C6CCE573E6FBD4BBE52D2D32A6DFE5813FC9CD2549B6712AC3D5943467A20A1CB05F69A640B1C4",
            "B7B28FD098A4A941593AD3DC94D63CDB7438A44ACC4D2582F74AA5531238EEF3496D71917E63B6ABA65FC3A484F84F62",
            "51BEF8C5ECDB3892E306E508910CC4284155FBCB5A89157E71E835BF4D72093DBE3A38505B77311B8DB3C724459AA7AC",
            "6D00145A04B7BA13EB510A984141224E656187814150A6795C89DE194A57D52EE65D1C532C7E98CD1A0616A46873D034",
            "04135CA171D35A7C55DB5E64E13787305604E511B4298012F1793988A202117C2766B788B778F2CA0AA838AB0A64C2BF",
            "665D9584C1A1251E875D1A500B2012CC41BB6E0B5138B84BCB0203010001",
        ),
    ),
    (
        "DigiCert Assured ID Root CA",
        concat!(
            "3082010A0282010100AD0E15CEE443805CB187F3B760F97112A5AEDC269488AAF4CEF520392858600CF880DAA9159532",
            "613CB5B128848A8ADC9F0A0C83177A8F90AC8AE779535C31842AF60F98323676CCDEDD3CA8A2EF6AFB21F25261DF9F20",
            "D71FE2B1D9FE1864D2125B5FF9581835BC47CDA136F96B7FD4B0383EC11BC38C33D9D82F18FE280FB3A783D6C36E44C0",
            "61359616FE599C8B766DD7F1A24B0D2BFF0B72DA9E60D08E9035C678558720A1CFE56D0AC8497C3198336C22E987D032",
            "5AA2BA138211ED39179D993A72A1E6FAA4D9D5173175AE857D22AE3F014686F62879C8B1DAE45717C47E1C0EB0B492A6",
            "56B3BDB297EDAAA7F0B7C5A83F9516D0FFA196EB085F18774F0203010001",
        ),
    ),
    (
        "DigiCert Global Root G2",
        concat!(
            "3082010A0282010100BB37CD34DC7B6BC9B26890AD4A75FF46BA210A088DF51954C9FB88DBF3AEF23A89913C7AE6AB06",
            "1A6BCFAC2DE85E092444BA629A7ED6A3A87EE054752005AC50B79C631A6C30DCDA1F19B1D71EDEFDD7E0CB948337AEEC",
            "1F434EDD7B2CD2BD2EA52FE4A9B8AD3AD499A4B625E99B6B00609260FF4F214918F76790AB61069C8FF2BAE9B4E99232",
            "6BB5F357E85D1BCD8C1DAB95049549F3352D96E3496DDD77E3FB494BB4AC5507A98F95B3B423BB4C6D45F0F6A9B29530",
            "B4FD4C558C274A57147C829DCD7392D3164A060C8C50D18F1E09BE17A1E621CAFD83E510BC83A50AC46728F67314143D",
            "4676C387148921344DAF0F450CA649A1BABB9CC5B1338329850203010001",
        ),
    ),
    (
        "DigiCert Global Root G3",
        concat!(
            "04DDA7D9BB8AB80BFB0B7F21D2F0BEBE73F3335D1ABC34EADEC69BBCD095F6F0CCD00BBA615B51467E9E2D9FEE8E630C",
            "17EC0770F5CF842E40839CE83F416D3BADD3A4145936789D0343EE10136C72DEAE88A7A16BB543CE67DC23FF031CA3E2",
            "3E",
        ),
    ),
    (
        "Entrust Root Certification Authority",
        concat!(
            "3082010A0282010100B695B64342FAC66D2A6F48DF944C395705EEC37911416836EDECFE9A018FA13828FCF71046662E",
            "4D1E1AB11A4EC6D1C09588B0C9FF318B3303DBB7837B3E20845EEDB25628A7F8E0B9407137C5CB470E972A68C0229562",
            "15DB47D9F5D02BFF824BC9AD3EDE4CDB9080503F098A8400EC300A3D18CDFBFD2A599A2395172C459E1F6E43796D0C5C",
            "98FE48A7C523475C5EFD6EE71EB4F66845D186835BA28A8DB1E32980FE257188ADBEBC8FAC52964BAA518DE4133119E8",
            "4E4D9FDBACB36AD5BC395471CA7A7A7F90DD7D1D80D981BB5926C211FEE693E2F780E465FB34370E2980704DAF38862E",
            "9E7F57AF9E17AEEB1CCB28215FB61CD8E7A20422F9D3DAD8CB0203010001",
        ),
    ),
    (
        "Entrust Root Certification Authority - G2",
        concat!(
            "3082010A0282010100BA84B672DB9E0C6BE299E93001A776EA32B895411AC9DA614E5872CFFEF68279BF7361060AA527",
            "D8B35FD3454E1C72D64E32F2728A0FF78319D06A808000451EB0C7E79ABF1257271CA3682F0A87BD6A6B0E5E65F31C77",
            "D5D4858D7021B4B332E78BA2D5863902B1B8D247CEE4C949C43BA7DEFB547D57BEF0E86EC279B23A0B55E25098163213",
            "5C2F7856C1C294B3F25AE4279A9F24D7C6ECD09B2582E3CCC2C445C58C977A066B2A119FA90A6E483B6FDBD4111942F7",
            "8F07BFF5535F9C3EF4172CE669AC4E324C6277EAB7E8E5BB34BC198BAE9C51E7B77EB553B13322E56DCF703C1AFAE29B",
            "67B683F48DA5AF624C4DE058AC64341203F8B68D946324A4710203010001",
        ),
    ),
    (
        "Entrust Root Certification Authority - EC1",
        concat!(
            "048413C9D0BA6D417BE26CD0EB555F66021A24F45B896947E3B8C27DF1F202C59FA0F65BD58B0619864F53106D072427",
            "A1A0F8D54719614C7DCA9327EA740CEF6F9609FE63EC705D36AD6777AEC99D7C55443AA263511FF5E362D4A947073ECC",
            "20",
        ),
    ),
    (
        "Entrust.net Certification Authority (2048)",
        concat!(
            "3082010A0282010100AD4D4BA91286B2EAA320071516642A2B4BD1BF0B4A4D8EED8076A567B77840C07342C868C0DB53",
            "2BDD5EB8769835938B1A9D7C133A0E1F5BB71ECFE524141EB181A98D7DB8CC6B4B03F1020CDCABA54024007F7494A19D",
            "0829B3880BF587779D55CDE4C37ED76A64AB851486955B9732506F3DC8BA660CE3FCBDB849C176894919FDC0A8BD89A3",
            "672FC69FBC711960B82DE92CC99076667B94E2AF78D665535D3CD69CB2CF2903F92FA450B2D448CE0532558AFDB2644C",
            "0EE4980775DB7FDFB9085560853029F97B48A46986E3353F1E865D7A7A15BDEF008E1522541700902693BC0E496891BF",
            "F847D39D9542C10E4DDF6F26CFC3182162664370D6D5C007E10203010001",
        ),
    ),
    (
        "Baltimore CyberTrust Root",
        concat!(
            "3082010A0282010100A304BB22AB983D57E826729AB579D429E2E1E89580B1B0E35B8E2B299A64DFA15DEDB009056DDB",
            "282ECE62A262FEB488DA12EB38EB219DC0412B01527B8877D31C8FC7BAB988B56A09E773E81140A7D1CCCA628D2DE58F",
            "0BA650D2A850C328EAF5AB25878A9A961CA967B83F0CD5F7F952132FC21BD57070F08FC012CA06CB9AE1D9CA337A77D6",
            "F8ECB9F16844424813D2C0C2A4AE5E60FEB6A605FCB4DD075902D459189863F5A563E0900C7D5DB2067AF385EAEBD403",
            "AE5E843E5FFF15ED69BCF939367275CF77524DF3C9902CB93DE5C923533F1F2498215C079929BDC63AECE76E863A6B97",
            "746333BD681831F0788D76BFFC9E8E5D2A86A74D90DC271A390203010001",
        ),
    ),
    (
        "GlobalSign Root CA",
        concat!(
            "3082010A0282010100DA0EE6998DCEA3E34F8A7EFBF18B83256BEA481FF12AB0B9951104BDF063D1E26766CF1CDDCF1B",
            "482BEE8D898E9AAF298065ABE9C72D12CBAB1C4C7007A13D0A30CD158D4FF8DDD48C50151CEF50EEC42EF7FCE952F291",
            "7DE06DD535308E5E4373F241E9D56AE3B2893A5639386F063C88695B2A4DC5A754B86C89CC9BF93CCAE5FD89F5123C92",
            "7896D6DC746E934461D18DC746B2750E86E8198AD56D6CD5781695A2E9C80A38EBF224134F73549313853A1BBC1E34B5",
            "8B058CB9778BB1DB1F2091AB09536E90CE7B3774B97047912251631679AEB1AE412608C8192BD146AA48D6642AD78334",
            "FF2C2AC16C19434A0785E7D37CF62168EFEAF2529F7F9390CF0203010001",
        ),
    ),
    (
        "GlobalSign Root CA - R3",
        concat!(
            "3082010A0282010100CC2576907906782216F5C083B684CA289EFD057611C5AD8872FC460243C7B28A9D045F24CB2E4B",
            "E1608246E152AB0C8147706CDD64D1EBF52CA30F823D0C2BAE97D7B614861079BB3B1380778C08E149D26A622F1F5EFA",
            "9668DF892795389F06D73EC9CB26590D73DEB0C8E9260E8315C6EF5B8BD20460CA49A628F6693BF6CBC82891E59D8A61",
            "5737AC7414DC74E03AEE722F2E9CFBD0BBBFF53D00E10633E8822BAE53A63A16738CDD410E203AC0B4A7A1E9B24F902E",
            "3260E957CBB904926868E538266075B29F77FF9114EFAE2049FCAD401548D1023161195EB897EFAD77B7649A7ABF5FC1",
            "13EF9B62FB0D6CE0546916A903DA6EE983937176C6698582170203010001",
        ),
    ),
    (
        "Go Daddy Root Certificate Authority - G2",
        concat!(
            "3082010A0282010100BF716208F1FA5934F71BC918A3F7804958E9228313A6C52043013B84F1E685499F27EAF6841B4E",
            "A0B4DB7098C73201B1053E074EEEF4FA4F2F593022E7AB19566BE28007FCF316758039517BE5F935B6744EA98D8213E4",
            "B63FA90383FAA2BE8A156A7FDE0BC3B6191405CAEAC3A804943B467C320DF3006622C88D696D368C1118B7D3B21C60B4",
            "38FA028CCED3DD4607DE0A3EEB5D7CC87CFBB02B53A4926269512505611A44818C2CA9439623DFAC3A819A0E29C51CA9",
            "E95D1EB69E9E300A39CEF18880FB4B5DCC32EC85624325340256270191B43B702A3F6EB1E89C88017D9FD4F9DB536D60",
            "9DBF2CE758ABB85F46FCCEC41B033C09EB49315C6946B3E0470203010001",
        ),
    ),
    (
        "Amazon Root CA 1",
        concat!(
            "3082010A0282010100B2788071CA78D5E371AF478050747D6ED8D78876F49968F7582160F97484012FAC022D86D3A043",
            "7A4EB2A4D036BA01BE8DDB48C80717364CF4EE8823C73EEB37F5B519F84968B0DED7B976381D619EA4FE8236A5E54A56",
            "E445E1F9FDB416FA74DA9C9B35392FFAB02050066C7AD080B2A6F9AFEC47198F503807DCA2873958F8BAD5A9F9486730",
            "96EE94785E6F89A351C0308666A14566BA54EBA3C391F948DCFFD1E8302D7D2D747035D78824F79EC4596EBB738717F2",
            "324628B843FAB71DAACAB4F29F240E2D4BF7715C5E69FFEA9502CB388AAE50386FDBFB2D621BC5C71E54E177E067C80F",
            "9C8723D63F40207F2080C4804C3E3B24268E04AE6C9AC8AA0D0203010001",
        ),
    ),
    (
        "Amazon Root CA 3",
        concat!(
            "042997A7C6417FC00D9BE8011B56C6F252A5BA2DB212E8D22ED7FAC9C5D8AA6D1F73813B3B986B397C33A5C54E868E80",
            "17686245577D44581DB337E56708EB66DE",
        ),
    ),
    (
        "USERTrust ECC Certification Authority",
        concat!(
            "041AAC545AA9F96823E77AD5246F53C65AD84BABC6D5B6D1E67371AEDD9CD60C61FDDBA08903B80514EC57CEEE5D3FE2",
            "21B3CEF7D48A79E0A3837E2D97D061C4F199DC259163AB7F30A3B470E2C7A1339CF3BF2E5C53B15FB37D327F8A34E379",
            "79",
        ),
    ),
];
