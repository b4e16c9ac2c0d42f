use crate::api::{
	AccountAddress, Config, ExportedEncryptedKey, ExportedKey, ExportedPemKey, InputKey, InternalTransactionId, Key, LogStream, Options, RawInitialAccountState,
	TestWalletInitialAccountState, TonlibError, UnpackedAccountAddress, WalletInitialAccountState,
};
use crate::tl::{FUNCTION_INTERFACE, OBJECT_INTERFACE, Registry, SecureBytes};

tl_object! {
	/// Start the library.
	Init = "init" {
		options: Option<Options>,
	}

	/// Shut the library down.
	Close = "close" {}

	OptionsSetConfig = "options.setConfig" {
		config: Option<Config>,
	}

	CreateNewKey = "createNewKey" {
		local_password: SecureBytes,
		mnemonic_password: SecureBytes,
		random_extra_seed: SecureBytes,
	}

	DeleteKey = "deleteKey" {
		key: Option<Key>,
	}

	ExportKey = "exportKey" {
		input_key: Option<InputKey>,
	}

	ExportPemKey = "exportPemKey" {
		input_key: Option<InputKey>,
		key_password: SecureBytes,
	}

	ExportEncryptedKey = "exportEncryptedKey" {
		input_key: Option<InputKey>,
		key_password: SecureBytes,
	}

	ImportKey = "importKey" {
		local_password: SecureBytes,
		mnemonic_password: SecureBytes,
		exported_key: Option<ExportedKey>,
	}

	ImportPemKey = "importPemKey" {
		local_password: SecureBytes,
		key_password: SecureBytes,
		exported_key: Option<ExportedPemKey>,
	}

	ImportEncryptedKey = "importEncryptedKey" {
		local_password: SecureBytes,
		key_password: SecureBytes,
		exported_encrypted_key: Option<ExportedEncryptedKey>,
	}

	ChangeLocalPassword = "changeLocalPassword" {
		input_key: Option<InputKey>,
		new_local_password: SecureBytes,
	}

	UnpackAccountAddress = "unpackAccountAddress" {
		account_address: String,
	}

	PackAccountAddress = "packAccountAddress" {
		account_address: Option<UnpackedAccountAddress>,
	}

	GetBip39Hints = "getBip39Hints" {
		prefix: String,
	}

	RawGetAccountAddress = "raw.getAccountAddress" {
		initital_account_state: Option<RawInitialAccountState>,
	}

	RawGetAccountState = "raw.getAccountState" {
		account_address: Option<AccountAddress>,
	}

	/// Fetch a page of transactions ending at `from_transaction_id`.
	RawGetTransactions = "raw.getTransactions" {
		account_address: Option<AccountAddress>,
		from_transaction_id: Option<InternalTransactionId>,
	}

	RawSendMessage = "raw.sendMessage" {
		destination: Option<AccountAddress>,
		initial_account_state: Vec<u8>,
		data: Vec<u8>,
	}

	TestWalletInit = "testWallet.init" {
		private_key: Option<InputKey>,
	}

	TestWalletGetAccountAddress = "testWallet.getAccountAddress" {
		initital_account_state: Option<TestWalletInitialAccountState>,
	}

	TestWalletGetAccountState = "testWallet.getAccountState" {
		account_address: Option<AccountAddress>,
	}

	TestWalletSendGrams = "testWallet.sendGrams" {
		private_key: Option<InputKey>,
		destination: Option<AccountAddress>,
		seqno: i32,
		amount: i64,
		message: Vec<u8>,
	}

	WalletInit = "wallet.init" {
		private_key: Option<InputKey>,
	}

	WalletGetAccountAddress = "wallet.getAccountAddress" {
		initital_account_state: Option<WalletInitialAccountState>,
	}

	WalletGetAccountState = "wallet.getAccountState" {
		account_address: Option<AccountAddress>,
	}

	WalletSendGrams = "wallet.sendGrams" {
		private_key: Option<InputKey>,
		destination: Option<AccountAddress>,
		seqno: i32,
		valid_until: i64,
		amount: i64,
		message: Vec<u8>,
	}

	TestGiverGetAccountState = "testGiver.getAccountState" {}

	TestGiverGetAccountAddress = "testGiver.getAccountAddress" {}

	TestGiverSendGrams = "testGiver.sendGrams" {
		destination: Option<AccountAddress>,
		seqno: i32,
		amount: i64,
		message: Vec<u8>,
	}

	GenericGetAccountState = "generic.getAccountState" {
		account_address: Option<AccountAddress>,
	}

	/// Send grams from any supported wallet kind.
	GenericSendGrams = "generic.sendGrams" {
		private_key: Option<InputKey>,
		source: Option<AccountAddress>,
		destination: Option<AccountAddress>,
		amount: i64,
		timeout: i32,
		allow_send_to_uninited: bool,
		message: Vec<u8>,
	}

	/// Answer to an `updateSendLiteServerQuery`.
	OnLiteServerQueryResult = "onLiteServerQueryResult" {
		id: i64,
		bytes: Vec<u8>,
	}

	/// Failure answer to an `updateSendLiteServerQuery`.
	OnLiteServerQueryError = "onLiteServerQueryError" {
		id: i64,
		error: Option<TonlibError>,
	}

	RunTests = "runTests" {
		dir: String,
	}

	SetLogStream = "setLogStream" {
		log_stream: Option<LogStream>,
	}

	GetLogStream = "getLogStream" {}

	SetLogVerbosityLevel = "setLogVerbosityLevel" {
		new_verbosity_level: i32,
	}

	GetLogVerbosityLevel = "getLogVerbosityLevel" {}

	GetLogTags = "getLogTags" {}

	SetLogTagVerbosityLevel = "setLogTagVerbosityLevel" {
		tag: String,
		new_verbosity_level: i32,
	}

	GetLogTagVerbosityLevel = "getLogTagVerbosityLevel" {
		tag: String,
	}

	AddLogMessage = "addLogMessage" {
		verbosity_level: i32,
		text: String,
	}
}

tl_enum! {
	/// Any request the library accepts.
	Function = FUNCTION_INTERFACE => {
		Init(Init),
		Close(Close),
		OptionsSetConfig(OptionsSetConfig),
		CreateNewKey(CreateNewKey),
		DeleteKey(DeleteKey),
		ExportKey(ExportKey),
		ExportPemKey(ExportPemKey),
		ExportEncryptedKey(ExportEncryptedKey),
		ImportKey(ImportKey),
		ImportPemKey(ImportPemKey),
		ImportEncryptedKey(ImportEncryptedKey),
		ChangeLocalPassword(ChangeLocalPassword),
		UnpackAccountAddress(UnpackAccountAddress),
		PackAccountAddress(PackAccountAddress),
		GetBip39Hints(GetBip39Hints),
		RawGetAccountAddress(RawGetAccountAddress),
		RawGetAccountState(RawGetAccountState),
		RawGetTransactions(RawGetTransactions),
		RawSendMessage(RawSendMessage),
		TestWalletInit(TestWalletInit),
		TestWalletGetAccountAddress(TestWalletGetAccountAddress),
		TestWalletGetAccountState(TestWalletGetAccountState),
		TestWalletSendGrams(TestWalletSendGrams),
		WalletInit(WalletInit),
		WalletGetAccountAddress(WalletGetAccountAddress),
		WalletGetAccountState(WalletGetAccountState),
		WalletSendGrams(WalletSendGrams),
		TestGiverGetAccountState(TestGiverGetAccountState),
		TestGiverGetAccountAddress(TestGiverGetAccountAddress),
		TestGiverSendGrams(TestGiverSendGrams),
		GenericGetAccountState(GenericGetAccountState),
		GenericSendGrams(GenericSendGrams),
		OnLiteServerQueryResult(OnLiteServerQueryResult),
		OnLiteServerQueryError(OnLiteServerQueryError),
		RunTests(RunTests),
		SetLogStream(SetLogStream),
		GetLogStream(GetLogStream),
		SetLogVerbosityLevel(SetLogVerbosityLevel),
		GetLogVerbosityLevel(GetLogVerbosityLevel),
		GetLogTags(GetLogTags),
		SetLogTagVerbosityLevel(SetLogTagVerbosityLevel),
		GetLogTagVerbosityLevel(GetLogTagVerbosityLevel),
		AddLogMessage(AddLogMessage),
	}
}

impl Function {
	/// Interface the response to this request decodes as.
	pub fn result_type(&self) -> &'static str {
		Registry::global().result_type_of(self.discriminator()).unwrap_or(OBJECT_INTERFACE)
	}
}

#[cfg(test)]
mod tests;
