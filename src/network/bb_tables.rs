//! Initial P-array and S-boxes of the BB cipher.

pub(super) const P_ARRAY: [u32; 18] = [
    0x640CDED2, 0xCA6CF7CF, 0xC7BC95FB, 0x7D0D60A3,
    0xCF23AD88, 0x8FFB62DC, 0x6C3DA5CC, 0x6BFCD6D6,
    0x63F492DF, 0xE32EBE65, 0xC3746B6D, 0xC5703934,
    0xDC940BCE, 0x590E0892, 0xEA9413E8, 0xF4B13DE7,
    0x505893FC, 0xE3D696E3,
];

pub(super) const S_BOXES: [[u32; 256]; 4] = [
    [
        0x5CC73FD6, 0x19572A8E, 0x1EAD320E, 0x29913B33,
        0x05C06104, 0xC5A1316E, 0x456D82A7, 0x5A987789,
        0xBFDCAA97, 0x23094413, 0x70B100F7, 0xEF18F524,
        0x9B2632B1, 0x1A7AA450, 0x36355519, 0x1A8FC2AD,
        0xE13D6A17, 0xC74AF6AF, 0xB771FC73, 0x8C332A8C,
        0x13792C10, 0xA707616F, 0x69D18CE4, 0x4BB744C2,
        0x74DA584B, 0xC2186564, 0xBEF96BFD, 0x9FF42F9E,
        0xF6334290, 0x74249103, 0xC0D5CCCC, 0xACC295F2,
        0x7BB4D473, 0xBA4753A2, 0x46806E9F, 0x7F8EB321,
        0x16803FE6, 0x891FD2BC, 0xE7218373, 0x82CDF207,
        0x819879E3, 0xB0CDE742, 0xA9160843, 0x14336F73,
        0xFC0B51A2, 0x2FD13817, 0x231C4134, 0xBEA851C9,
        0x1B8B5DBF, 0xB225A875, 0x6BCC7EC4, 0xCC5C66EF,
        0xB5C06E89, 0xDC479976, 0x1B984ED0, 0x35BD70C1,
        0x8EC73F26, 0xC85ED3FB, 0x93A2CFF3, 0xC0C1889F,
        0x74C405A6, 0xB4BA3842, 0x62A89A52, 0x850373D1,
        0xA8AD015E, 0x4087946A, 0x1E81C985, 0xE0278FEE,
        0x6D38EC05, 0xBF4E158A, 0x63E32BDD, 0x17578163,
        0x9861C874, 0x535ED4CF, 0xE0674A4A, 0xA2233B6C,
        0x523574E3, 0x35D19568, 0x0247AFF9, 0xED2BF2A5,
        0x1A404CC6, 0x5700A52C, 0x3F5847FC, 0x9139F9FC,
        0x8721985A, 0x17A0493B, 0xF333A0D4, 0x489411FF,
        0xD92EF4DB, 0x1E50C960, 0x833757F6, 0xBBC00C1B,
        0x01558F29, 0x68058035, 0xDB7D2645, 0x5D11A667,
        0xAEE02660, 0x3F5B5474, 0xE3CF9E79, 0x8E0E6574,
        0x2E4CEC6F, 0xB900EBB0, 0x30F703C1, 0xE73ECEE4,
        0x907D69CB, 0xB785648D, 0xEE57BBE1, 0xA0862CB0,
        0xE942E1C5, 0x2C7D0221, 0xDF5445F7, 0xD8C8AC9F,
        0x22F05641, 0x3E295EAC, 0x1E138FAA, 0x3598F64D,
        0xDA199769, 0xF157C46D, 0x7CA171C5, 0x94301DB9,
        0xFDC90D52, 0x387128A3, 0x41D7C806, 0xD3190DAB,
        0x3ACD7A85, 0xE83EBBE3, 0x14322C57, 0x26845B42,
        0xB2CD49CB, 0xE4D22B24, 0x23C11989, 0xE4FCD996,
        0x0FC3AD3D, 0xE17A680C, 0xF4F0F8D8, 0x72350D14,
        0x4C747633, 0xC9633B10, 0xFEC3618B, 0xFDE8DD1C,
        0x9369EDF4, 0xC8AECED7, 0xE7160549, 0x75BD584C,
        0xF0451846, 0xCEFB421C, 0x50FC8705, 0xD67643AE,
        0x970AFDE8, 0x09F8DEBA, 0x6E82EAAD, 0x80CEB947,
        0x51AFE307, 0x727B3F2F, 0xB22B287B, 0xF077F03A,
        0x4B670178, 0x1F942DDE, 0x37AFEAFF, 0xE569CDE3,
        0xB78DD11D, 0x6E8307D1, 0x95CE57C6, 0xC0E34476,
        0x2CA562D1, 0x6373D161, 0x2E549898, 0xC6F47EC6,
        0x4A2A6BE4, 0x6898DD70, 0xFF954A7C, 0x8F033CD0,
        0xCD64C8E8, 0x3C0A7D7B, 0xA3057D95, 0xECD438E0,
        0xC111363A, 0xB94FD214, 0x7F224DFE, 0xF042A491,
        0x9F1489FC, 0x75E73DC9, 0x1EA04F71, 0xA38F2685,
        0x8BA7AF61, 0x8DBF33DF, 0x4EACD05D, 0x3CEF9B0E,
        0x9604FE9F, 0xB65D9990, 0xBBCB14BA, 0x06FC3A41,
        0xE15376DE, 0x97D9BC59, 0x8318618A, 0x2DB10C0C,
        0x3736FC1F, 0x6E8136D8, 0x7E470DB5, 0xC60DAED2,
        0x5A19532F, 0x98094AA8, 0xE830FEA2, 0x126A0685,
        0x2B76B98F, 0xA378F291, 0xD36FB474, 0xA3849120,
        0x7868242A, 0x87743EA2, 0x1D74914F, 0xB341998C,
        0xD5B45B60, 0xCD97DD2E, 0x9CEF94C3, 0x907D0C7B,
        0xAA967285, 0x2C0C2B35, 0x852D480B, 0xAFB7455C,
        0x0FB40A91, 0xDE019AC6, 0xF285AA86, 0xB5AF214B,
        0x94E3A9D8, 0x61CC82DE, 0x592CE330, 0x24943EEF,
        0xC689113F, 0x68A7FE73, 0xCE85CAE0, 0x9477D5B7,
        0x7EE161B8, 0x1C4F6B1B, 0xAD1073F1, 0xFBA9FFF8,
        0x11A5CE22, 0x19BE7AF3, 0x8646D47A, 0xDD92E45B,
        0xA5B089C8, 0x05DB18A7, 0xD915FB67, 0xAE545E52,
        0x738B8333, 0xE351E074, 0xD846F324, 0x4C4C85AE,
        0x1F705EAF, 0x3C65970C, 0xB540A652, 0x08355576,
        0x88FD52F2, 0x1176FA93, 0x04D2406A, 0xA53E17C7,
    ],
    [
        0xC5FB6441, 0xD36FC212, 0x5C5AC0C9, 0xE2C932C2,
        0xD22A7467, 0xAD1D4B06, 0xDC30354A, 0x09F640EA,
        0x1B063309, 0x0777B7A2, 0xE30F2845, 0xB16ED5E6,
        0x897B6ABF, 0x1E2EC223, 0xCFB0AC5C, 0x0297F232,
        0x7F56F89D, 0xA3F50491, 0x7C847191, 0x61D4B903,
        0x25EE2690, 0x58F77A26, 0xC2D527FE, 0x8123AFBE,
        0x7DFF42E6, 0x9572104B, 0x15D8E9F6, 0x23F908C8,
        0x1156A4DC, 0xF8816E83, 0xAEA972EC, 0x9095ECFB,
        0xFDD7AFAD, 0xAA156F86, 0x3306C3AD, 0x5B21343D,
        0x13D0F0D9, 0xA9098ABF, 0x522944F1, 0x76D2A256,
        0xE259A0B5, 0x4675D80D, 0x8B3DFC79, 0xB9A76F83,
        0xF168CD53, 0x0609A55B, 0x98E96452, 0xB17832D9,
        0x8A90CBC9, 0xC0229573, 0x17266917, 0x20055F24,
        0xAAF79B0D, 0xE0D393EB, 0x282C0B07, 0x63AF3BBE,
        0x9FD9AE8F, 0xA0325E5C, 0x759B22AC, 0xABB02882,
        0xAA56E55C, 0xA302AA9E, 0x95E40019, 0x1F41E3C9,
        0x164B605D, 0x30CD6081, 0xF46F6677, 0x66FDDBB7,
        0xAE738ACE, 0x64A9B3FF, 0x76CB795F, 0x8671B0E4,
        0x946FDF07, 0x0F0712DC, 0x14BE281A, 0xEE01E411,
        0x5473C49F, 0xDD572435, 0x6183D89B, 0xD8946913,
        0xCCA66FF9, 0x39D5A9BE, 0x3B1A7D18, 0xA72B5D96,
        0x111E8E30, 0xDAB26740, 0x3F64B3DE, 0xD1695E1A,
        0x33A19648, 0x31DC630A, 0xF5F35694, 0xB91ED674,
        0x06FE9043, 0xBE9E4E5B, 0xDA426AAB, 0x535055EC,
        0x0D2B265E, 0xEF43B103, 0xB7EDF4B1, 0xAA2618F5,
        0xA3D00018, 0xEFA242CC, 0x49D47F55, 0x562677C2,
        0x7D41EEDA, 0x40BF3AA5, 0x135B8EEA, 0x5DBED1DA,
        0x99BC688A, 0xFE073B61, 0x34E62A8E, 0x5125D336,
        0xDC70A9A6, 0x292C52B4, 0x2C7E2F60, 0x04647F1F,
        0x8A1989C4, 0xEBA69244, 0xA54A3897, 0xFAC0D4D0,
        0xAD47205B, 0xF794C013, 0xCD3C0A23, 0xBA9671AC,
        0x8D1EAEA6, 0x0DE2E83E, 0x9FBEE730, 0xFA0684A3,
        0x42D96104, 0x0E97CE42, 0x698374A6, 0xEF7D8288,
        0xF590DE72, 0x6899F987, 0x1BFD58EC, 0x38B4B274,
        0x088A50AE, 0xAE2113B0, 0xE64CF295, 0xBB67F9BE,
        0xDFA77BC0, 0x598481EA, 0x13E267B8, 0xA7EB1033,
        0x7CA6DDDA, 0x4A836CED, 0xBF89C618, 0xBFBE9DAE,
        0xA44FE33A, 0xA0BE3198, 0xED12AF84, 0x20976BE3,
        0x4754AA5B, 0x72930C88, 0xB68D8550, 0x532558E9,
        0x230F5F40, 0xC0BD9035, 0x672F3482, 0xA89A61BF,
        0x4AA288DC, 0x2045C67A, 0xC59B9AE6, 0xA0337DF9,
        0xE1857270, 0xFD3DFF5D, 0xE301EC12, 0x50FFAE66,
        0x89DFE89C, 0x768C6E14, 0x0AA10D87, 0xFE2FEEF1,
        0x61B3A2EE, 0xD5A31E6F, 0x7789B9F2, 0x0FF5C3B1,
        0x29F1C194, 0x77D011B0, 0xECC10B84, 0x6F931750,
        0x70B62A8F, 0xBB83CEFE, 0x5F497EB2, 0xF17666D6,
        0x5D785704, 0x865C980B, 0xF0249EC2, 0xAAE844DB,
        0x4CD28E52, 0xDA93ADE9, 0xD966908C, 0xA4B9FDDC,
        0x1FAE7671, 0x96513D07, 0x98F07CB6, 0x7C13B222,
        0x1F05FFE7, 0xFF903B48, 0xC8D0DBBB, 0xA6E52EB5,
        0x7D7BC10A, 0xAFE0D2F7, 0x01B79CC8, 0x578225F9,
        0xE40C41B3, 0xB5C7E26A, 0xA46286EF, 0x7B138D12,
        0x432661B3, 0xC9C8124E, 0xE4BE379B, 0x34AEE10D,
        0x59AFF4CB, 0xDAD26C27, 0x5C9561B8, 0x4D6B0452,
        0x10955F82, 0x8AAD8718, 0x4AAF2843, 0xB94C51F7,
        0x756FF181, 0xE701F22E, 0xA70427EE, 0x52654509,
        0x2E4C3CAB, 0x33E7AF57, 0xCCDC8F42, 0xB8B3CA13,
        0x9122C3F3, 0xF074441A, 0x48E1C890, 0xAE102653,
        0xC977A7F2, 0x2FE76749, 0x754513C2, 0xA2A86DF9,
        0x7312F6B7, 0xCCA4E105, 0xACFB96CD, 0xA0A9A9B2,
        0x237FAF6D, 0x45B7EB4D, 0x0C3E5872, 0x460C5991,
        0x97248330, 0xA47541B2, 0xBF76D53B, 0x6C6C782B,
        0x38A76A50, 0x712E9FEC, 0xE7071507, 0x0E4202B2,
        0x95A4154E, 0x62F6DA87, 0x3DFD5418, 0xD7AB33F5,
    ],
    [
        0x8E13062C, 0x2CEEE22E, 0x0B54E6A6, 0xD073C03A,
        0x3D3F670E, 0xDB090F3A, 0xCB73AB2D, 0x210CC211,
        0x79FC9477, 0x56DB66CE, 0x7607573A, 0xC56D0340,
        0x0D6F50E7, 0x0F911F2A, 0x16F5699B, 0x63123CB0,
        0x0015F81B, 0xFC22CC2B, 0x6594C4BA, 0x1D645134,
        0x8633C3C5, 0x6565D5D9, 0xC902200B, 0x8EA7AA6E,
        0xA28B3D86, 0x9F22EF15, 0x9E80E834, 0x1931D611,
        0xD25095ED, 0xDCE57608, 0xBE54D17A, 0xB75B7B77,
        0xFF53C715, 0x6D1FE6F3, 0xF4F1E1E8, 0x507749B1,
        0x0C153DB4, 0x7E80AD1C, 0xA5791026, 0xAD3DBE27,
        0x7A65A28F, 0x9361771B, 0x570CC089, 0x8D3412AA,
        0xA68FD2E0, 0xDAB72770, 0x2A303EDC, 0x6477E936,
        0x16F913E0, 0x09274ED9, 0xE49A321D, 0x1E64052E,
        0x74AB96C9, 0xD5FDD822, 0x3DB27BD0, 0x13E13918,
        0xD083F603, 0xA4CC1CD1, 0x2FF33194, 0x8F610AB0,
        0xA1472C0F, 0x618F44D7, 0x25294EAB, 0x4D6915BF,
        0xFCE933D0, 0x32454A0A, 0xA0BDC3A7, 0xA5E7417C,
        0x736BE207, 0xE1859393, 0x4B2BA3CA, 0x689C8713,
        0xA1431A31, 0xB1E88845, 0xF1AB868B, 0x5A832C62,
        0xB774E1EA, 0xF334763C, 0x1692AA49, 0xDEBB4312,
        0x934B30B3, 0x551E3EED, 0x7E832F92, 0x73E7DF4A,
        0x0E51B5EB, 0xEFA0C479, 0x08804ADF, 0x770EE5F0,
        0x3F35314A, 0x9E2CABCC, 0x40C2F1E4, 0xE9764A79,
        0xE947E751, 0x52261A4D, 0x8C0A9EE8, 0x23E5D212,
        0x954E09E5, 0xCD1AF9F0, 0x23B48F97, 0x5A1A7DDC,
        0xC4D467CF, 0x8A1301D3, 0x30A40AE0, 0xDC9B40A1,
        0x102BFB9F, 0x5A429B7F, 0xB0025E38, 0x58D3215E,
        0xCD199BDB, 0x6738E9BD, 0xD063B1F4, 0xF72FFC51,
        0x56C10096, 0xA7959937, 0xA9E12B93, 0x40C42AB1,
        0xA812D5CA, 0x712A414E, 0x55242B16, 0x3C1E0AD7,
        0x069B7F70, 0xF7B3E6C8, 0x5A592AA1, 0x84438CA2,
        0xBC775FD6, 0xA9B80BD7, 0x089BAD81, 0x0D8DE9CC,
        0xC8B58CC9, 0xB35975C1, 0x5B39B997, 0xBFF2C526,
        0xB4256EB5, 0x71675891, 0x6FBE1984, 0x306519F6,
        0x08CE4519, 0xF2357ABE, 0x3FC05C11, 0x30C6E91D,
        0x7763FDA3, 0xFDD5D266, 0x110B6F90, 0x1F2EFD86,
        0x98D90A21, 0xAE8EDDEC, 0xA2E88E17, 0xDF6D25D9,
        0xB783C519, 0xFF880B82, 0x3BF0C612, 0x2BD6849C,
        0x7354B07A, 0x020B7961, 0xEBA8E89E, 0x2ED7D4BF,
        0x8F438E34, 0xF14B33E9, 0xE6FE502F, 0xBF986A6E,
        0xA103993A, 0x27C5B0FF, 0x3ABB8CA0, 0x86EDF8D4,
        0xD01E172E, 0x38F4A865, 0x0DAE791A, 0x1C89748F,
        0xEB3E3795, 0xBFE7D73B, 0x4EC6C12A, 0x877EF600,
        0x5A3CBC36, 0x116030C8, 0xD5B7A87C, 0x524D84D9,
        0x23E3E04F, 0x78097FA7, 0xFEC92E57, 0x7E4DB0C5,
        0x3B66D2C0, 0x2DDEF511, 0x3ED80C4B, 0x13A4087F,
        0x0D5EE881, 0xAD6AD02E, 0x5A542426, 0x2BDEF8E7,
        0x446A7DA7, 0xFC268A55, 0x5D9D00BD, 0x3710D1B5,
        0x270F7612, 0x38F22C86, 0xFFBFEC26, 0x9482AA51,
        0x8DD6673B, 0x8F7C80EF, 0x5C12531F, 0x86AE5611,
        0x9CCCD007, 0x4D29CBF6, 0x8A0FF3A8, 0xF0F2332D,
        0x275D7034, 0xDA8F94FD, 0x5AC736FA, 0xB4CB60E4,
        0x1E74C5A9, 0x53CC5AC5, 0xEC538437, 0x825489D9,
        0x0BA43378, 0x07657513, 0x35EC8375, 0x1DA2A732,
        0x7A3B5EDE, 0xAB6FD84E, 0x6F8B7EDA, 0x39994295,
        0xD45F7FAF, 0xBF6AE7C4, 0xE4257C3D, 0x5EE315A1,
        0x0BB321C5, 0x0E88401B, 0xB7053E8B, 0xD25E9808,
        0x9FF33EF5, 0x89A0BD64, 0xFFDB0F83, 0xA34404C9,
        0x70C36E1E, 0x9BE9BABB, 0x2A932500, 0x5750FD0E,
        0xA4CAB6F5, 0x9EC00D66, 0x1B5F057D, 0xC88A5A6B,
        0x57E3D177, 0xBC09B7D8, 0xB7EBA4D3, 0x077F3FE7,
        0xF8DC24F4, 0x25E5CF54, 0xD052AEF5, 0x30C74026,
        0xFD5E2773, 0xCE327753, 0xCABD0692, 0xCF4C8BE0,
        0x3AF2851F, 0xF2B8CC7C, 0x2838C54B, 0xBD2729DB,
    ],
    [
        0xC570A03C, 0x1CD9298D, 0x53AC5593, 0x5CB35E31,
        0xCA7F4500, 0x868E31F8, 0x68BF5639, 0x927BB899,
        0x97869F8C, 0x22C8AFF2, 0xE97AB5AC, 0xC4E199F7,
        0x11F56E63, 0x316E6F9B, 0xDC0B25B0, 0x3C0E37BF,
        0x2260AB3D, 0xC7F5E4FE, 0x3D408195, 0x618DC6C1,
        0x8801C70E, 0xC181139D, 0xEECFB730, 0x19F23DE1,
        0xD9C4ED07, 0x6E4C91A3, 0x4B7131FD, 0x882FD1B0,
        0x95DAC0A1, 0xC764F41B, 0xE8B192A7, 0x8C8AB9C3,
        0x035446CB, 0xC8655163, 0xF6CA7757, 0xFA554923,
        0x850ADB81, 0x9F44293C, 0x06742262, 0x872A79D3,
        0xCC79E9FD, 0xBDAF5759, 0xA75653BB, 0x25A1C64F,
        0x33BF5313, 0xFCC408F4, 0xC61DBE73, 0x2DA095D3,
        0xDA93F942, 0x2807D44A, 0x6663B694, 0x1383C9A1,
        0xFCCF0B6C, 0x2EBE6EC6, 0x3EDF77EC, 0x066D5D70,
        0x6BC67BB5, 0xC54EE732, 0xEBE6E605, 0xA5F5CF9A,
        0x3D6C0AB2, 0x572BE8C0, 0xF02195C5, 0xCC75FF05,
        0x5454BCE7, 0xED431C7A, 0x35FF8D73, 0xA69F1357,
        0xBE3322DF, 0x8D5701D3, 0x8227C6E1, 0x7F92B847,
        0x17503B18, 0xFEBF088F, 0xB969378C, 0x80695378,
        0x6EB6C428, 0xF6AE7809, 0xF8115237, 0x72659F3D,
        0x90DD9052, 0xF60E6B5B, 0xE98A45D4, 0x6CA89B02,
        0x85327733, 0x7C899229, 0x923FCEDA, 0x987066D2,
        0x3497E625, 0x3E04C58D, 0xB1BE8DB6, 0x172BAEF9,
        0x30C3CC5A, 0x573DDE84, 0x67F06558, 0x8E21FF58,
        0x00F3F92D, 0x6CF4CFC2, 0x13415015, 0xF461CD1D,
        0xAD6C6355, 0x92BF842C, 0x274E705E, 0xEE44FD1D,
        0x05FD79B4, 0x40741777, 0x70A40BF2, 0x261632C0,
        0xD3DAE96B, 0xE8EBC9BD, 0x3BE3D490, 0xB4530A30,
        0xBA6DFDE5, 0x3A648E2D, 0xB14C4F26, 0x7C7D0A3E,
        0x559FB601, 0x44B1A722, 0x72FCFF7F, 0xF62F6ADF,
        0xAEC6F92E, 0x6511AD20, 0x4AF6AD4A, 0xAA5B3A09,
        0x5303B2BE, 0xBB66DF75, 0xA2490B13, 0xEACF61BA,
        0x73B29C61, 0x509A66EE, 0x8080BDDA, 0x9216DACA,
        0xFAEFC031, 0x65896009, 0x3FA36CFC, 0x995FEFF2,
        0xCE98EAB5, 0x66D7E0CD, 0xE5A71216, 0xD182BC77,
        0xC7D769A6, 0xDA5ECC66, 0x0473072C, 0xE84B6CC7,
        0x8BBD0177, 0x0D1075AA, 0x2BF0168C, 0xA7229229,
        0xBB80827B, 0xF0066C50, 0x5A614BF6, 0x23AFE56A,
        0x067DAA78, 0xBF01EEE6, 0x5B081768, 0x1CC2F422,
        0xFB6A0382, 0xA5A777A7, 0x7609E111, 0x77097C89,
        0x075C4FBF, 0x51E9004F, 0xEC84F0CB, 0x1DE8CC73,
        0x2A54A800, 0x09A89025, 0xFA5F8045, 0xC29B195D,
        0xCFF9BFE6, 0x522DBFF5, 0x9C374800, 0x347DCD8F,
        0x974DA9C0, 0x8D6A6D88, 0xB47EF442, 0xA51E66CA,
        0xA210C54A, 0x4F63C725, 0xFF1A465D, 0x813EB31B,
        0x0E0058D5, 0x3C18CE5A, 0xC4D7D98C, 0x4E24DA16,
        0x5AEC5AF6, 0x912CD19F, 0xB12BF2D1, 0x184D3B0B,
        0x82DBD6DA, 0xD29EAD22, 0x9D13DCE5, 0xBEA27F78,
        0xB957B027, 0xE0DAE424, 0x1AE3AB8F, 0x49C349A2,
        0x74EFDA3D, 0x88539BD4, 0xB9F027C3, 0x5739E997,
        0x08D6028E, 0x8D1F0B8F, 0x63256408, 0x9B216118,
        0xD89432D3, 0x3BEBF6CA, 0x21735953, 0x0EDA4BFB,
        0xE6AFC2D4, 0xA9DB95F9, 0x1F1C6BB0, 0xBAAF121B,
        0x8CDC1B36, 0x3913F9FD, 0x863BCB1A, 0xBD34ADCB,
        0xDA48457A, 0x4F584129, 0xDD85156C, 0x0324F396,
        0xD41E1EE1, 0xC3B48F82, 0x2124FB4C, 0x6C0B2635,
        0x95CE3157, 0xA8DACA8C, 0xB54E1542, 0xD989F76A,
        0x0C1EA5E3, 0x973FE85C, 0xE6E91D97, 0x2916B8DF,
        0x5B0B05E2, 0x57BDC906, 0x7CB2CCEF, 0x131C7553,
        0x41CA9311, 0x6E70E1C1, 0x0F972BF2, 0x8CF59D7A,
        0xE6613022, 0x69218E19, 0xC350744A, 0xA2D5BF1B,
        0x9FA14B7B, 0x8867F25C, 0xB8E19AF6, 0x777A25DF,
        0xA2004E28, 0xFB929664, 0x2DA8A284, 0x21955D47,
        0xF0CEBD06, 0x9887B1E9, 0xBF7810C1, 0x265D91F9,
    ],
];
